use async_trait::async_trait;

use crate::domain::product::model::Product;

pub struct SearchProductsParams {
    /// Raw user input; blank input matches nothing.
    pub query: String,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Vec<Product>;
}
