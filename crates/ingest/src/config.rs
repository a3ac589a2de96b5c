//! Ingestion configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `FITVIEW_DATABASE_URL` - `PostgreSQL` connection string
//!
//! ## Optional
//! - `FITVIEW_DB_MAX_CONNECTIONS` - Pool size (default: 10)

use secrecy::SecretString;
use thiserror::Error;

const DATABASE_URL_VAR: &str = "FITVIEW_DATABASE_URL";
const MAX_CONNECTIONS_VAR: &str = "FITVIEW_DB_MAX_CONNECTIONS";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Database settings for the ingestion pipeline.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl IngestConfig {
    /// Load configuration from the environment, reading `.env` first if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if the database URL is unset and
    /// `ConfigError::InvalidEnvVar` if the pool size is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_required_env(DATABASE_URL_VAR).map(SecretString::from)?;
        let max_connections = parse_max_connections(get_optional_env(MAX_CONNECTIONS_VAR).as_deref())?;

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_max_connections(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_MAX_CONNECTIONS);
    };
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar(
            MAX_CONNECTIONS_VAR.to_string(),
            "must be at least 1".to_string(),
        )),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::InvalidEnvVar(
            MAX_CONNECTIONS_VAR.to_string(),
            e.to_string(),
        )),
    }
}
