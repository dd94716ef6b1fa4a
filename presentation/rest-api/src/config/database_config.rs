use std::env;
use std::time::Duration;

use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub pool: DatabaseConfig,
    pub run_migrations: bool,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - DATABASE_ACQUIRE_TIMEOUT_SECS: seconds to wait for a connection (default: 5)
    /// - DATABASE_RUN_MIGRATIONS: "true" to apply migrations at startup (default: false)
    /// - DATABASE_MIGRATIONS_PATH: migrations directory
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Self::from_values(
            url,
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("DATABASE_ACQUIRE_TIMEOUT_SECS").ok(),
            env::var("DATABASE_RUN_MIGRATIONS").ok(),
            env::var("DATABASE_MIGRATIONS_PATH").ok(),
        )
    }

    fn from_values(
        url: String,
        max_connections: Option<String>,
        acquire_timeout_secs: Option<String>,
        run_migrations: Option<String>,
        migrations_path: Option<String>,
    ) -> anyhow::Result<Self> {
        let mut pool = DatabaseConfig::new(url);
        if let Some(max) = max_connections {
            pool.max_connections = max
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
        }
        if let Some(secs) = acquire_timeout_secs {
            let secs: u64 = secs
                .parse()
                .context("DATABASE_ACQUIRE_TIMEOUT_SECS must be a whole number of seconds")?;
            pool.acquire_timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            pool,
            run_migrations: run_migrations.is_some_and(|v| v.eq_ignore_ascii_case("true")),
            migrations_path: migrations_path.unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Initialize the database connection pool
///
/// The pool connects lazily; an unreachable database is not an error here.
/// A failed migration run is logged and startup continues.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.pool)?;

    if settings.run_migrations {
        match run_migrations(&pool, &settings.migrations_path).await {
            Ok(()) => tracing::info!(path = %settings.migrations_path, "migrations applied"),
            Err(err) => tracing::warn!(error = %err, "migrations not applied"),
        }
    }

    Ok(pool)
}
