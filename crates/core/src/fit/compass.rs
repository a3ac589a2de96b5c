//! Labels and verdicts for fit compass readings.

use crate::types::FitCompass;

/// Label for the width axis.
#[must_use]
pub fn width_label(width_fit: f64) -> &'static str {
    axis_label(
        width_fit,
        ["Very Tight", "Slim", "True to Size", "Relaxed", "Oversized / Baggy"],
    )
}

/// Label for the length axis.
#[must_use]
pub fn length_label(length_fit: f64) -> &'static str {
    axis_label(
        length_fit,
        ["Very Cropped", "Short", "Standard Length", "Long", "Extra Long / Tall"],
    )
}

/// Overall verdict for a compass reading.
///
/// A few distinctive silhouettes get their own name; everything else is the
/// width label and length label joined with " / ".
#[must_use]
pub fn compass_verdict(compass: &FitCompass) -> String {
    let FitCompass {
        width_fit,
        length_fit,
    } = *compass;

    if width_fit > 0.3 && length_fit < -0.3 {
        "Boxy & Cropped".to_owned()
    } else if width_fit > 0.5 && length_fit > 0.5 {
        "Super Oversized".to_owned()
    } else if width_fit < -0.3 && length_fit < -0.3 {
        "Small & Short".to_owned()
    } else {
        format!("{} / {}", width_label(width_fit), length_label(length_fit))
    }
}

/// Sizing advice derived from the mean of both axes.
#[must_use]
pub fn size_recommendation(compass: &FitCompass) -> &'static str {
    let overall = (compass.width_fit + compass.length_fit) / 2.0;
    if overall > 0.6 {
        "Runs Large: Consider sizing down."
    } else if overall < -0.6 {
        "Runs Small: Consider sizing up."
    } else {
        "True to size: Order your standard size."
    }
}

/// How close a reviewer's height is to the shopper's, from 0.0 to 1.0.
///
/// Drops to zero at a 10cm difference.
#[must_use]
pub fn height_proximity(shopper_height_cm: u32, reviewer_height_cm: u32) -> f64 {
    let difference = f64::from(shopper_height_cm.abs_diff(reviewer_height_cm));
    (1.0 - difference / 10.0).max(0.0)
}

// Breakpoints at -0.7 / -0.2 / 0.2 / 0.7. The centre bucket is closed on both ends.
fn axis_label(value: f64, labels: [&'static str; 5]) -> &'static str {
    let [very_neg, neg, centre, pos, very_pos] = labels;
    if value < -0.7 {
        very_neg
    } else if value < -0.2 {
        neg
    } else if value <= 0.2 {
        centre
    } else if value < 0.7 {
        pos
    } else {
        very_pos
    }
}
