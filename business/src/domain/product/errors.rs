#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_id")]
    InvalidId,
    #[error("product.not_found")]
    NotFound,
}
