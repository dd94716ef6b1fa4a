/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A stored row could not be mapped onto the domain model.
    #[error("repository.persistence")]
    Persistence,
    /// The query failed or the database was unreachable.
    #[error("repository.database_error")]
    DatabaseError,
}
