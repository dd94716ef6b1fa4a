use async_trait::async_trait;

use crate::domain::product::model::Product;

/// Lists the catalog, newest first. Never fails: an empty or unreachable
/// store yields the sample catalog.
#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Product>;
}
