//! Brand detection and normalization.
//!
//! # Cascade
//!
//! 1. JSON-LD: a nested `brand.name`, else a flat `brand` string
//! 2. Meta tags: `product:brand`, `og:brand`, `twitter:data1`
//! 3. Store fallback (ASOS only): first two words of the page title, used when
//!    nothing was found *or* what was found is just the store's own name
//! 4. The store name itself
//!
//! Amazon is overridden to [`UNKNOWN`] before the cascade runs. Marketplace
//! sellers make its branding too noisy to trust.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::json_ld::{self, scalar_text};
use super::store::{AMAZON, ASOS};
use super::{UNKNOWN, title_case};
use crate::document::ProductDocument;

const BRAND_META_KEYS: &[&str] = &["product:brand", "og:brand", "twitter:data1"];

/// Stripped once each, in this order, case-insensitively.
const BRAND_SUFFIXES: &[&str] = &[
    " Official Store",
    " Online",
    " AU",
    " US",
    " UK",
    " Australia",
    " Inc",
    ".com",
    ":",
];

/// Titles at least this long are product copy, not a brand-led title.
const MAX_TITLE_BRAND_LEN: usize = 50;

static NESTED_BRAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""brand"\s*:\s*\{[^}]*?"name"\s*:\s*"([^"]+)""#).expect("Invalid regex")
});

static FLAT_BRAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""brand"\s*:\s*"([^"]+)""#).expect("Invalid regex"));

type BrandStrategy = fn(&dyn ProductDocument) -> Option<String>;

const BRAND_STRATEGIES: &[(&str, BrandStrategy)] =
    &[("json_ld", brand_from_json_ld), ("meta", brand_from_meta)];

/// Detect the brand of the product on `doc`, sold by `store_name`.
///
/// Always returns a normalized display name; the store name is the last resort.
#[must_use]
pub fn detect_brand(doc: &dyn ProductDocument, store_name: &str) -> String {
    if store_name == AMAZON {
        debug!(store = store_name, "Brand detection disabled for store");
        return UNKNOWN.to_owned();
    }

    let detected = BRAND_STRATEGIES.iter().find_map(|(name, strategy)| {
        let brand = strategy(doc)?;
        debug!(strategy = *name, brand = %brand, "Brand detected");
        Some(brand)
    });

    // A brand equal to the store name came from generic store metadata.
    let detected = match detected {
        Some(brand) if brand != store_name => Some(brand),
        generic => store_title_fallback(doc, store_name).or(generic),
    };

    normalize_brand(detected.as_deref().unwrap_or(store_name))
}

/// Clean a raw brand string into its display form.
#[must_use]
pub fn normalize_brand(raw: &str) -> String {
    let stripped = BRAND_SUFFIXES
        .iter()
        .fold(raw.trim(), |name, suffix| strip_suffix_ignore_case(name, suffix));
    title_case(stripped.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace()))
}

fn brand_from_json_ld(doc: &dyn ProductDocument) -> Option<String> {
    doc.script_blocks(json_ld::SCRIPT_TYPE).iter().find_map(|block| {
        json_ld::find_field(block, nested_brand, &NESTED_BRAND_RE)
            .or_else(|| json_ld::find_field(block, flat_brand, &FLAT_BRAND_RE))
    })
}

fn nested_brand(key: &str, value: &Value) -> Option<String> {
    if key != "brand" {
        return None;
    }
    match value {
        Value::Object(brand) => brand.get("name").and_then(scalar_text),
        Value::Array(brands) => brands
            .iter()
            .find_map(|brand| brand.get("name").and_then(scalar_text)),
        _ => None,
    }
}

fn flat_brand(key: &str, value: &Value) -> Option<String> {
    (key == "brand").then(|| scalar_text(value)).flatten()
}

fn brand_from_meta(doc: &dyn ProductDocument) -> Option<String> {
    BRAND_META_KEYS
        .iter()
        .find_map(|key| doc.meta_content(key))
        .map(|content| content.trim().to_owned())
}

fn store_title_fallback(doc: &dyn ProductDocument, store_name: &str) -> Option<String> {
    if store_name != ASOS {
        return None;
    }
    let title = doc.title()?;
    let first = title.split('|').next()?.trim();
    if first.is_empty() || first.chars().count() >= MAX_TITLE_BRAND_LEN {
        return None;
    }
    let brand = first.split_whitespace().take(2).collect::<Vec<_>>().join(" ");
    debug!(strategy = "store_title", brand = %brand, "Brand detected");
    Some(brand)
}

fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> &'a str {
    let Some(split) = name.len().checked_sub(suffix.len()) else {
        return name;
    };
    match (name.get(..split), name.get(split..)) {
        (Some(head), Some(tail)) if tail.eq_ignore_ascii_case(suffix) => head,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;

    fn page(head: &str) -> HtmlDocument {
        HtmlDocument::parse(&format!("<html><head>{head}</head><body></body></html>"))
    }

    #[test]
    fn test_normalize_strips_suffixes() {
        assert_eq!(normalize_brand("  Nike Official Store "), "Nike");
        assert_eq!(normalize_brand("UNIQLO AU"), "Uniqlo");
        assert_eq!(normalize_brand("Adidas Australia"), "Adidas");
        assert_eq!(normalize_brand("zalando.com"), "Zalando");
        assert_eq!(normalize_brand("Patagonia Inc"), "Patagonia");
        assert_eq!(normalize_brand("Cotton On:"), "Cotton On");
    }

    #[test]
    fn test_normalize_single_pass() {
        // " Online" is checked before " AU" exposes it, so it survives.
        assert_eq!(normalize_brand("Nike Online AU"), "Nike Online");
    }

    #[test]
    fn test_normalize_keeps_inner_text() {
        assert_eq!(normalize_brand("USA Pro"), "Usa Pro");
        assert_eq!(normalize_brand("h&m"), "H&M");
        assert_eq!(normalize_brand("...Levi's!"), "Levi's");
        assert_eq!(normalize_brand("Nike Online Shop"), "Nike Online Shop");
    }

    #[test]
    fn test_amazon_is_always_unknown() {
        let doc = page(
            r#"<script type="application/ld+json">{"brand": {"name": "Nike"}}</script>
               <meta property="og:brand" content="Nike">"#,
        );
        assert_eq!(detect_brand(&doc, "Amazon"), "Unknown");
    }

    #[test]
    fn test_json_ld_nested_beats_flat_and_meta() {
        let doc = page(
            r#"<meta property="product:brand" content="MetaBrand">
               <script type="application/ld+json">{"@type": "Product", "brand": {"@type": "Brand", "name": "The North Face"}}</script>"#,
        );
        assert_eq!(detect_brand(&doc, "Myer"), "The North Face");
    }

    #[test]
    fn test_json_ld_flat_brand() {
        let doc = page(r#"<script type="application/ld+json">{"brand": "nike"}</script>"#);
        assert_eq!(detect_brand(&doc, "Nike"), "Nike");
    }

    #[test]
    fn test_first_script_with_a_brand_wins() {
        let doc = page(
            r#"<script type="application/ld+json">{"@type": "Organization"}</script>
               <script type="application/ld+json">{"brand": "Converse"}</script>
               <script type="application/ld+json">{"brand": "Vans"}</script>"#,
        );
        assert_eq!(detect_brand(&doc, "Platypus"), "Converse");
    }

    #[test]
    fn test_meta_keys_in_order() {
        let doc = page(
            r#"<meta name="twitter:data1" content="Twitter Brand">
               <meta property="og:brand" content="Og Brand">"#,
        );
        assert_eq!(detect_brand(&doc, "Myer"), "Og Brand");
    }

    #[test]
    fn test_falls_back_to_store_name() {
        let doc = page("<title>Double Cloth Shirt | BIG W</title>");
        assert_eq!(detect_brand(&doc, "Big W"), "Big W");
    }

    #[test]
    fn test_asos_title_fallback_when_nothing_found() {
        let doc = page("<title>ASOS DESIGN oversized t-shirt in black | ASOS</title>");
        assert_eq!(detect_brand(&doc, "Asos"), "Asos Design");
    }

    #[test]
    fn test_asos_title_fallback_when_brand_is_store() {
        let doc = page(
            r#"<title>Nike Club fleece hoodie | ASOS</title>
               <meta property="og:brand" content="Asos">"#,
        );
        assert_eq!(detect_brand(&doc, "Asos"), "Nike Club");
    }

    #[test]
    fn test_asos_title_fallback_skipped_for_real_brand() {
        let doc = page(
            r#"<title>Nike Club fleece hoodie | ASOS</title>
               <meta property="og:brand" content="Nike">"#,
        );
        assert_eq!(detect_brand(&doc, "Asos"), "Nike");
    }

    #[test]
    fn test_asos_long_title_ignored() {
        let doc = page(
            "<title>Collusion unisex oversized long sleeve t-shirt with print in washed grey | ASOS</title>",
        );
        assert_eq!(detect_brand(&doc, "Asos"), "Asos");
    }
}
