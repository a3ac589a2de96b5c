//! Translating perceived fit between regional sizing conventions.

use crate::types::{MarketRegion, SizingGroup};

/// Warning shown when a review comes from a market whose sizing differs
/// sharply from the shopper's own.
///
/// Only the US and Asia groups are far enough apart to warrant a note. Every
/// other pairing, including two regions in the same group, returns `None`.
#[must_use]
pub fn regional_warning(user_region: MarketRegion, review_region: MarketRegion) -> Option<String> {
    match (user_region.sizing_group(), review_region.sizing_group()) {
        (SizingGroup::Us, SizingGroup::Asia) => Some(format!(
            "Note: {} sizing runs significantly smaller than US sizing.",
            review_region.display_name()
        )),
        (SizingGroup::Asia, SizingGroup::Us) => Some(format!(
            "Note: US sizing runs significantly larger than {} sizing.",
            user_region.display_name()
        )),
        _ => None,
    }
}

/// Multiplier applied to a garment's nominal volume when it is read in
/// another region's sizing.
#[must_use]
pub fn volume_scale(garment_region: MarketRegion, user_region: MarketRegion) -> f64 {
    match (garment_region.sizing_group(), user_region.sizing_group()) {
        (SizingGroup::Asia, SizingGroup::Us) => 0.8,
        (SizingGroup::Us, SizingGroup::Asia) => 1.2,
        (SizingGroup::Western, SizingGroup::Us) => 0.95,
        _ => 1.0,
    }
}
