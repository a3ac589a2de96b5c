//! Core types for FitView.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod body;
pub mod compass;
pub mod id;
pub mod product;
pub mod region;

pub use body::{BodyBuild, BodyComparison, ComparisonTier, UserMetricProfile};
pub use compass::FitCompass;
pub use id::*;
pub use product::{GenderCategory, Product, ProductIdentity};
pub use region::{MarketRegion, MeasurementSystem, SizingGroup};
