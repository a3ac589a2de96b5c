//! Fit scoring commands.
//!
//! Thin wrappers over `fitview_core::fit` that print their results as JSON.

use serde::Serialize;

use fitview_core::fit::{
    compare as compare_profiles, compass_verdict, length_label, regional_warning,
    size_recommendation, suggest_build as suggest, volume_scale, width_label,
};
use fitview_core::{BodyBuild, FitCompass, MarketRegion, UserId, UserMetricProfile};

use super::{CommandError, emit};

/// Height, weight, and build as given on the command line.
pub type Metrics = (Option<u32>, Option<u32>, Option<BodyBuild>);

#[derive(Serialize)]
struct CompassReport {
    width_fit: f64,
    length_fit: f64,
    width: &'static str,
    length: &'static str,
    verdict: String,
    recommendation: &'static str,
}

#[derive(Serialize)]
struct ComparisonReport {
    tier: &'static str,
    percentage: u8,
}

#[derive(Serialize)]
struct BuildReport {
    build: BodyBuild,
}

#[derive(Serialize)]
struct TranslationReport {
    from: &'static str,
    to: &'static str,
    volume_scale: f64,
    warning: Option<String>,
}

/// Describe a compass reading. Inputs outside [-1, 1] are clamped.
pub fn compass(width: f64, length: f64) -> Result<(), CommandError> {
    let reading = FitCompass::new(width, length);
    emit(&CompassReport {
        width_fit: reading.width_fit,
        length_fit: reading.length_fit,
        width: width_label(reading.width_fit),
        length: length_label(reading.length_fit),
        verdict: compass_verdict(&reading),
        recommendation: size_recommendation(&reading),
    })
}

/// Compare two profiles.
pub fn compare(a: Metrics, b: Metrics) -> Result<(), CommandError> {
    let result = compare_profiles(&profile(a), &profile(b)).ok_or_else(|| {
        CommandError::InvalidInput("both profiles need height, weight and build".to_owned())
    })?;
    emit(&ComparisonReport {
        tier: result.tier.label(),
        percentage: result.percentage,
    })
}

pub fn suggest_build(height_cm: u32, weight_kg: u32) -> Result<(), CommandError> {
    let build = suggest(height_cm, weight_kg)
        .ok_or_else(|| CommandError::InvalidInput("height must be above zero".to_owned()))?;
    emit(&BuildReport { build })
}

/// Volume scale and warning for a garment sized in `from`, worn in `to`.
pub fn translate(from: MarketRegion, to: MarketRegion) -> Result<(), CommandError> {
    emit(&TranslationReport {
        from: from.display_name(),
        to: to.display_name(),
        volume_scale: volume_scale(from, to),
        warning: regional_warning(to, from),
    })
}

fn profile((height_cm, weight_kg, body_build): Metrics) -> UserMetricProfile {
    UserMetricProfile {
        user_id: UserId::generate(),
        height_cm,
        weight_kg,
        body_build,
    }
}
