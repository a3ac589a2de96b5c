//! The two-axis fit compass attached to a review.

use serde::{Deserialize, Serialize};

/// How a garment's cut deviates from true to size.
///
/// `width_fit`: -1.0 (tight) to 1.0 (baggy).
/// `length_fit`: -1.0 (cropped) to 1.0 (long).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FitCompass {
    pub width_fit: f64,
    pub length_fit: f64,
}

impl FitCompass {
    /// Create a compass reading, clamping both axes into `[-1, 1]`.
    ///
    /// NaN readings collapse to 0 (true to size).
    #[must_use]
    pub fn new(width_fit: f64, length_fit: f64) -> Self {
        Self {
            width_fit: clamp_axis(width_fit),
            length_fit: clamp_axis(length_fit),
        }
    }
}

fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
