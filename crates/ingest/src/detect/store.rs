//! Retailer name from a product URL.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::title_case;

pub const AMAZON: &str = "Amazon";
pub const ASOS: &str = "Asos";
pub const UNIQLO: &str = "Uniqlo";
pub const ZARA: &str = "Zara";

/// Domain labels whose display name is not just the capitalized label.
const KNOWN_STORES: &[(&str, &str)] = &[
    ("hm", "H&M"),
    ("bigw", "Big W"),
    ("kmart", "Kmart"),
    ("uniqlo", UNIQLO),
    ("amazon", AMAZON),
    ("asos", ASOS),
    ("zara", ZARA),
];

/// Matches `www.`, `www2.`, or `m.` at the start of a host.
static HOST_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:www\d*|m)\.").expect("Invalid regex"));

/// Canonical store name for a product URL.
///
/// Never fails: a URL without a host yields an empty name.
#[must_use]
pub fn detect_store(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_lowercase();
    let stripped = HOST_PREFIX_RE.replace(&host, "");
    let label = stripped.split('.').next().unwrap_or_default();

    KNOWN_STORES
        .iter()
        .find(|(key, _)| *key == label)
        .map_or_else(|| title_case(label), |(_, name)| (*name).to_owned())
}
