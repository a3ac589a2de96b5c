//! FitView Core - Shared types and fit scoring.
//!
//! This crate provides the domain types used across all FitView components:
//! - `ingest` - Product identity resolution and deduplicated persistence
//! - `cli` - Command-line tools for resolving pages and running migrations
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows the scoring
//! logic to run anywhere a review or profile is rendered.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, market regions, product identity, body metrics, fit compass
//! - [`fit`] - Body compatibility scoring, regional sizing translation, compass verdicts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fit;
pub mod types;

pub use types::*;
