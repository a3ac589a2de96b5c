//! Body compatibility scoring.
//!
//! Two complete profiles are scored out of 100:
//!
//! | Component | Max | Rule |
//! |-----------|-----|------|
//! | Height    | 40  | Full within 2cm, linear decay to zero at 20cm |
//! | Weight    | 40  | Full within 2kg, linear decay to zero at 20kg |
//! | Build     | 20  | Identical 20, adjacent on the ordinal scale 10 |
//!
//! The rounded sum is bucketed into a [`ComparisonTier`].

use crate::types::{BodyBuild, BodyComparison, ComparisonTier, UserMetricProfile};

const METRIC_MAX_POINTS: f64 = 40.0;
const METRIC_FULL_WITHIN: u32 = 2;
const METRIC_ZERO_AT: u32 = 20;

const BUILD_EXACT_POINTS: f64 = 20.0;
const BUILD_ADJACENT_POINTS: f64 = 10.0;

/// Compare two profiles.
///
/// Returns `None` when either profile is missing height, weight, or build.
/// The result does not depend on argument order.
#[must_use]
pub fn compare(a: &UserMetricProfile, b: &UserMetricProfile) -> Option<BodyComparison> {
    let (height_a, weight_a, build_a) = a.complete_metrics()?;
    let (height_b, weight_b, build_b) = b.complete_metrics()?;

    let score = metric_score(height_a.abs_diff(height_b))
        + metric_score(weight_a.abs_diff(weight_b))
        + build_score(build_a, build_b);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percentage = score.round().clamp(0.0, 100.0) as u8;

    Some(BodyComparison {
        tier: ComparisonTier::from_percentage(percentage),
        percentage,
    })
}

/// Find the most comparable candidate for `subject`.
///
/// Candidates with the subject's own ID are skipped, as are candidates with an
/// incomplete profile. On equal percentages the earliest candidate wins.
#[must_use]
pub fn find_best_match<'a>(
    subject: &UserMetricProfile,
    candidates: &'a [UserMetricProfile],
) -> Option<(&'a UserMetricProfile, BodyComparison)> {
    candidates
        .iter()
        .filter(|candidate| candidate.user_id != subject.user_id)
        .filter_map(|candidate| compare(subject, candidate).map(|c| (candidate, c)))
        .fold(None, |best, current| match best {
            Some((_, best_cmp)) if best_cmp.percentage >= current.1.percentage => best,
            _ => Some(current),
        })
}

/// Suggest a starting build from height and weight via BMI.
///
/// Used to pre-fill onboarding. Returns `None` for a zero height.
#[must_use]
pub fn suggest_build(height_cm: u32, weight_kg: u32) -> Option<BodyBuild> {
    if height_cm == 0 {
        return None;
    }
    let height_m = f64::from(height_cm) / 100.0;
    let bmi = f64::from(weight_kg) / (height_m * height_m);

    let build = if bmi < 18.5 {
        BodyBuild::Slim
    } else if bmi < 25.0 {
        BodyBuild::Average
    } else if bmi < 30.0 {
        BodyBuild::Athletic
    } else if bmi < 35.0 {
        BodyBuild::Muscular
    } else {
        BodyBuild::Large
    };
    Some(build)
}

fn metric_score(difference: u32) -> f64 {
    if difference <= METRIC_FULL_WITHIN {
        METRIC_MAX_POINTS
    } else if difference < METRIC_ZERO_AT {
        let span = f64::from(METRIC_ZERO_AT - METRIC_FULL_WITHIN);
        METRIC_MAX_POINTS * (1.0 - f64::from(difference - METRIC_FULL_WITHIN) / span)
    } else {
        0.0
    }
}

fn build_score(a: BodyBuild, b: BodyBuild) -> f64 {
    match a.ordinal().abs_diff(b.ordinal()) {
        0 => BUILD_EXACT_POINTS,
        1 => BUILD_ADJACENT_POINTS,
        _ => 0.0,
    }
}
