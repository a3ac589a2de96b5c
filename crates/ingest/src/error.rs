//! Error types for ingestion and persistence.

use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate brand and SKU).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Errors returned when admitting a resolved product into the catalogue.
#[derive(Debug, Error)]
pub enum IngestError {
    /// No manufacturer SKU was resolved, so the identity cannot be deduplicated.
    #[error("no SKU resolved for {0}")]
    MissingSku(String),

    /// The identity failed validation (unknown brand or implausible name).
    #[error("untrusted product identity for {0}")]
    Untrusted(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
