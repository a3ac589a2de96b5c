//! Fit scoring and translation.
//!
//! Pure, synchronous functions that higher-level read paths call when
//! rendering reviews:
//!
//! - [`body`] - How physically comparable two shoppers are
//! - [`regional`] - Sizing warnings and volume scaling across markets
//! - [`compass`] - Human-readable verdicts for a fit compass reading

pub mod body;
pub mod compass;
pub mod regional;

pub use body::{compare, find_best_match, suggest_build};
pub use compass::{compass_verdict, height_proximity, length_label, size_recommendation, width_label};
pub use regional::{regional_warning, volume_scale};
