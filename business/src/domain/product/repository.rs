use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::{ProductId, SearchQuery};

/// Read access to the authoritative product store.
///
/// Every method loads products together with their reviews.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, most recently created first.
    async fn find_all_newest_first(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
    /// Products whose name, description or category contains the query, ignoring case.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Product>, RepositoryError>;
}
