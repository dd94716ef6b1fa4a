use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::fallback::prefer_store;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::sample_catalog::sample_products;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::product::value_objects::SearchQuery;

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Vec<Product> {
        let Some(query) = SearchQuery::parse(&params.query) else {
            self.logger.debug("Blank search query, skipping store");
            return Vec::new();
        };

        self.logger
            .info(&format!("Searching products for: {}", query.as_str()));

        let products = prefer_store(
            "search_products",
            self.logger.as_ref(),
            self.repository.search(&query),
            || {
                sample_products()
                    .iter()
                    .filter(|product| query.matches(product))
                    .cloned()
                    .collect()
            },
        )
        .await;

        self.logger
            .info(&format!("Found {} matching products", products.len()));
        products
    }
}
