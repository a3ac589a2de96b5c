//! Sizing region from a product URL.
//!
//! Only the host and path are consulted. Checks run in priority order
//! (Japan, Korea, Australia, UK) and anything unmatched is treated as US.

use fitview_core::MarketRegion;
use url::Url;

struct RegionRule {
    region: MarketRegion,
    host_suffixes: &'static [&'static str],
    path_segments: &'static [&'static str],
}

const REGION_RULES: &[RegionRule] = &[
    RegionRule {
        region: MarketRegion::Jp,
        host_suffixes: &[".jp"],
        path_segments: &["/jp/", "/ja_jp/", "/ja-jp/"],
    },
    RegionRule {
        region: MarketRegion::Kr,
        host_suffixes: &[".kr"],
        path_segments: &["/kr/", "/ko_kr/", "/ko-kr/"],
    },
    RegionRule {
        region: MarketRegion::Au,
        host_suffixes: &[".au"],
        path_segments: &["/au/", "/en_au/", "/en-au/"],
    },
    RegionRule {
        region: MarketRegion::Uk,
        host_suffixes: &[".uk"],
        path_segments: &["/uk/", "/gb/", "/en_gb/", "/en-gb/"],
    },
];

/// Market region a product URL belongs to. Defaults to US.
#[must_use]
pub fn detect_region(url: &Url) -> MarketRegion {
    let host = url.host_str().unwrap_or_default().to_lowercase();
    let path = url.path().to_lowercase();

    REGION_RULES
        .iter()
        .find(|rule| {
            rule.host_suffixes.iter().any(|suffix| host.ends_with(suffix))
                || rule.path_segments.iter().any(|segment| path.contains(segment))
        })
        .map_or(MarketRegion::Us, |rule| rule.region)
}
