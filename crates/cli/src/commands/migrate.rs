//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! fitview migrate
//! ```
//!
//! # Environment Variables
//!
//! - `FITVIEW_DATABASE_URL` - `PostgreSQL` connection string
//! - `FITVIEW_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//!
//! Migrations live in `crates/ingest/migrations/`.

use fitview_ingest::IngestConfig;
use fitview_ingest::db::{create_pool, run_migrations};

use super::CommandError;

/// Apply pending migrations to the product database.
pub async fn run() -> Result<(), CommandError> {
    let config = IngestConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = create_pool(&config.database_url, config.max_connections).await?;

    tracing::info!("Running migrations...");
    run_migrations(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
