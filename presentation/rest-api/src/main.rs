use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use business::domain::product::sample_catalog::init_sample_catalog;
use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront catalog API entry point
///
/// - config/: environment-driven settings (server, CORS, database)
/// - setup/: dependency wiring and HTTP server
/// - api/: route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (before tracing so RUST_LOG in .env applies)
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Build the fallback catalog before serving requests
    init_sample_catalog();

    // 5. Initialize database (lazy; the API stays up without it)
    let pool = database_config::init_database(&config.database).await?;

    // 6. Wire dependencies
    let container = DependencyContainer::new(pool);

    // 7. Run server
    Server::run(config, container).await?;

    Ok(())
}
