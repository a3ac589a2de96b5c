//! Manufacturer SKU detection.
//!
//! # Cascade
//!
//! 1. Uniqlo stores: `Item Code: NNNNNN` in the visible page text
//! 2. JSON-LD: `sku`, else `mpn`; the first script with either wins
//! 3. Meta tags, for Nike only: a style code such as `HV0950-234`
//! 4. URL patterns keyed on the brand (Kmart `S123456`, Uniqlo `E123456-000`)
//! 5. Amazon stores: [`UNKNOWN`]
//!
//! Zara is overridden to [`UNKNOWN`] before the cascade runs: its structured
//! data carries no stable manufacturer code.
//!
//! `None` means nothing usable was found. Callers must treat that as a
//! rejection of the whole identity.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::UNKNOWN;
use super::json_ld::{self, scalar_text};
use super::store::{AMAZON, UNIQLO, ZARA};
use crate::document::ProductDocument;

const SKU_META_KEYS: &[&str] = &["product:retailer_item_id", "m_sku", "og:description"];

static UNIQLO_ITEM_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Item Code:\s*(\d{6})").expect("Invalid regex"));

static SKU_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""sku"\s*:\s*"([^"]+)""#).expect("Invalid regex"));

static MPN_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""mpn"\s*:\s*"([^"]+)""#).expect("Invalid regex"));

/// Nike style code: two letters, four digits, dash, three digits.
static NIKE_STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2}\d{4}-\d{3}").expect("Invalid regex"));

/// Kmart keycodes appear lowercased in product slugs (`rib-tank-s169486`).
static KMART_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)S\d{6,}").expect("Invalid regex"));

static UNIQLO_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"E(\d{6}-\d{3})").expect("Invalid regex"));

static SIX_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{6}").expect("Invalid regex"));

/// Detect the manufacturer SKU for a product page.
///
/// `brand_name` is the already-resolved brand and `store_name` the retailer.
#[must_use]
pub fn detect_sku(
    doc: &dyn ProductDocument,
    url: &str,
    brand_name: &str,
    store_name: &str,
) -> Option<String> {
    if store_name == ZARA {
        debug!(store = store_name, "SKU detection disabled for store");
        return Some(UNKNOWN.to_owned());
    }

    let brand = brand_name.to_lowercase();

    if store_name == UNIQLO
        && let Some(code) = capture(&UNIQLO_ITEM_CODE_RE, &doc.body_text())
    {
        debug!(strategy = "item_code", sku = %code, "SKU detected");
        return Some(code);
    }

    if let Some(sku) = sku_from_json_ld(doc) {
        debug!(strategy = "json_ld", sku = %sku, "SKU detected");
        return Some(sku);
    }

    if brand == "nike"
        && let Some(sku) = SKU_META_KEYS.iter().find_map(|key| {
            doc.meta_content(key)
                .and_then(|content| NIKE_STYLE_RE.find(&content).map(|m| m.as_str().to_owned()))
        })
    {
        debug!(strategy = "meta", sku = %sku, "SKU detected");
        return Some(sku);
    }

    if let Some(sku) = sku_from_url(url, &brand) {
        debug!(strategy = "url", sku = %sku, "SKU detected");
        return Some(sku);
    }

    if store_name == AMAZON {
        return Some(UNKNOWN.to_owned());
    }

    debug!(store = store_name, brand = brand_name, "No SKU found");
    None
}

fn sku_from_json_ld(doc: &dyn ProductDocument) -> Option<String> {
    doc.script_blocks(json_ld::SCRIPT_TYPE).iter().find_map(|block| {
        json_ld::find_field(block, sku_field, &SKU_FIELD_RE)
            .or_else(|| json_ld::find_field(block, mpn_field, &MPN_FIELD_RE))
    })
}

fn sku_field(key: &str, value: &Value) -> Option<String> {
    (key == "sku").then(|| scalar_text(value)).flatten()
}

fn mpn_field(key: &str, value: &Value) -> Option<String> {
    (key == "mpn").then(|| scalar_text(value)).flatten()
}

fn sku_from_url(url: &str, brand: &str) -> Option<String> {
    if brand.contains("kmart") {
        return KMART_URL_RE.find(url).map(|m| m.as_str().to_uppercase());
    }
    if brand.contains("uniqlo") {
        return capture(&UNIQLO_URL_RE, url)
            .or_else(|| SIX_DIGITS_RE.find(url).map(|m| m.as_str().to_owned()));
    }
    None
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}
