//! CLI command implementations.

pub mod fit;
pub mod migrate;
pub mod page;

use serde::Serialize;
use thiserror::Error;

use fitview_ingest::{ConfigError, IngestError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// A migration failed to apply.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The product URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The saved HTML could not be read.
    #[error("Could not read page: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Command input was well-formed but unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Print a value to stdout as pretty JSON.
fn emit<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(value)?;
    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}
