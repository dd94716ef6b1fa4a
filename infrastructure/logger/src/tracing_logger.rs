use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `tracing` target for every event emitted through the domain logger.
pub const LOG_TARGET: &str = "storefront::catalog";

/// Forwards domain log lines to the global `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}
