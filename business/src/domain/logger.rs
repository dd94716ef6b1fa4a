/// Diagnostics sink for the domain layer.
///
/// Catalog reads absorb store failures, so this is the only place those
/// failures become visible.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
