//! Trust and version checks on resolved identities.

use super::UNKNOWN;

/// Shortest product name accepted as real.
const MIN_NAME_LEN: usize = 3;

/// Length of the design code at the front of a SKU.
const VERSION_PREFIX_LEN: usize = 7;

/// Whether a resolved product carries enough data to be trusted.
///
/// Requires a non-empty SKU, a brand other than "unknown", and a name of at
/// least three characters.
#[must_use]
pub fn is_product_validated(sku: Option<&str>, brand: &str, name: &str) -> bool {
    sku.is_some_and(|sku| !sku.is_empty())
        && !brand.eq_ignore_ascii_case(UNKNOWN)
        && name.chars().count() >= MIN_NAME_LEN
}

/// Whether two SKUs denote the same design, ignoring colourway suffixes.
///
/// `E450535-000` and `E450535-001` share the design code `E450535`.
#[must_use]
pub fn is_same_version(scraped_sku: &str, existing_sku: &str) -> bool {
    scraped_sku
        .chars()
        .take(VERSION_PREFIX_LEN)
        .eq(existing_sku.chars().take(VERSION_PREFIX_LEN))
}
