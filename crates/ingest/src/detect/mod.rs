//! Detection cascades that turn a retailer page into identity fields.
//!
//! Each detector is a pure function over a URL and/or a [`ProductDocument`].
//! Cascades try their strategies in priority order and stop at the first hit.
//! Retailer overrides (Amazon brand, Zara SKU) are checked before a cascade
//! starts rather than living inside it.
//!
//! [`ProductDocument`]: crate::document::ProductDocument

pub mod brand;
pub mod gender;
mod json_ld;
pub mod region;
pub mod sku;
pub mod store;
pub mod validation;

pub use brand::{detect_brand, normalize_brand};
pub use gender::detect_gender;
pub use region::detect_region;
pub use sku::detect_sku;
pub use store::detect_store;
pub use validation::{is_product_validated, is_same_version};

/// Placeholder returned when a field cannot be trusted.
pub const UNKNOWN: &str = "Unknown";

/// Capitalize the first letter of each word and lowercase the rest.
///
/// A word starts after any character that is neither alphanumeric nor an
/// apostrophe, so `"h&m"` becomes `"H&M"` and `"levi's"` becomes `"Levi's"`.
pub(crate) fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = !(c.is_alphanumeric() || c == '\'');
    }
    out
}
