//! FitView Ingest - Retailer page resolution and deduplicated persistence.
//!
//! Turns an already-fetched retailer page into a canonical
//! [`ProductIdentity`](fitview_core::ProductIdentity) and admits it into the
//! catalogue at most once per `(brand, sku)`.
//!
//! # Modules
//!
//! - [`document`] - Read-only access to a parsed page
//! - [`detect`] - Store, brand, SKU, region, and gender cascades plus validation
//! - [`pipeline`] - Runs the detectors in order and validates the result
//! - [`gate`] - Find-or-create over a [`gate::ProductStore`]
//! - [`db`] - `PostgreSQL` store and migrations
//! - [`config`] - Environment configuration
//!
//! Fetching pages is out of scope. Callers hand in the HTML they already have.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod detect;
pub mod document;
pub mod error;
pub mod gate;
pub mod pipeline;

pub use config::{ConfigError, IngestConfig};
pub use document::{HtmlDocument, ProductDocument};
pub use error::{IngestError, RepositoryError};
pub use gate::{GateOutcome, IdempotencyGate, MemoryProductStore, ProductStore};
pub use pipeline::{ResolvedProduct, resolve_identity};
