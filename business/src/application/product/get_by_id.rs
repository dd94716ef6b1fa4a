use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::fallback::prefer_store;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::sample_catalog::find_sample_product;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Option<Product> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = prefer_store(
            "get_product_by_id",
            self.logger.as_ref(),
            self.repository.find_by_id(&params.id),
            || find_sample_product(&params.id).cloned(),
        )
        .await;

        if product.is_none() {
            self.logger
                .debug(&format!("Product {} not found", params.id));
        }
        product
    }
}
