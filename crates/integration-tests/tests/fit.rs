//! Integration tests for fit scoring and regional translation.

#![allow(clippy::unwrap_used)]

use fitview_core::fit::{
    compare, compass_verdict, find_best_match, regional_warning, size_recommendation,
    suggest_build, volume_scale,
};
use fitview_core::{BodyBuild, ComparisonTier, FitCompass, MarketRegion, UserId, UserMetricProfile};

fn profile(height_cm: u32, weight_kg: u32, build: BodyBuild) -> UserMetricProfile {
    UserMetricProfile {
        user_id: UserId::generate(),
        height_cm: Some(height_cm),
        weight_kg: Some(weight_kg),
        body_build: Some(build),
    }
}

// =============================================================================
// Reviewer Matching
// =============================================================================

#[test]
fn test_best_reviewer_for_onboarded_shopper() {
    let build = suggest_build(178, 74).unwrap();
    let shopper = profile(178, 74, build);

    let reviewers = [
        profile(160, 55, BodyBuild::Slim),
        profile(180, 76, build),
        shopper,
        profile(190, 95, BodyBuild::Muscular),
    ];

    let (best, comparison) = find_best_match(&shopper, &reviewers).unwrap();

    assert_ne!(best.user_id, shopper.user_id);
    assert_eq!(best.height_cm, Some(180));
    assert_eq!(comparison.tier, ComparisonTier::Twin);
    assert_eq!(compare(&shopper, best), compare(best, &shopper));
}

#[test]
fn test_incomplete_reviewers_are_skipped() {
    let shopper = profile(170, 65, BodyBuild::Average);
    let mut no_build = profile(170, 65, BodyBuild::Average);
    no_build.body_build = None;

    assert!(find_best_match(&shopper, &[no_build]).is_none());
}

// =============================================================================
// Regional Translation
// =============================================================================

#[test]
fn test_japanese_review_for_us_shopper() {
    let warning = regional_warning(MarketRegion::Us, MarketRegion::Jp);

    assert_eq!(
        warning.as_deref(),
        Some("Note: Japan sizing runs significantly smaller than US sizing.")
    );
    assert!((volume_scale(MarketRegion::Jp, MarketRegion::Us) - 0.8).abs() < f64::EPSILON);
}

#[test]
fn test_western_pairs_have_no_warning() {
    for (user, review) in [
        (MarketRegion::Us, MarketRegion::Au),
        (MarketRegion::Uk, MarketRegion::Eu),
        (MarketRegion::Jp, MarketRegion::Kr),
    ] {
        assert!(regional_warning(user, review).is_none(), "{user} / {review}");
    }
}

// =============================================================================
// Compass
// =============================================================================

#[test]
fn test_compass_reading_from_review() {
    let boxy = FitCompass::new(0.8, -0.6);
    assert_eq!(compass_verdict(&boxy), "Boxy & Cropped");
    assert_eq!(size_recommendation(&boxy), "True to size: Order your standard size.");

    let huge = FitCompass::new(1.5, 0.9);
    assert_eq!(compass_verdict(&huge), "Super Oversized");
    assert_eq!(size_recommendation(&huge), "Runs Large: Consider sizing down.");
}
