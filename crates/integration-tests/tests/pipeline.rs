//! Integration tests for resolving retailer pages into product identities.

#![allow(clippy::unwrap_used)]

use fitview_core::{GenderCategory, MarketRegion};
use fitview_integration_tests::{
    AMAZON_US, ASOS_US, BIGW_AU, HM_UK, KMART_AU, NIKE_JP, UNIQLO_AU, ZARA_AU,
};

// =============================================================================
// Trusted Retailers
// =============================================================================

#[test]
fn test_uniqlo_item_code_and_breadcrumbs() {
    let resolved = UNIQLO_AU.resolve().unwrap();
    let identity = &resolved.identity;

    assert!(resolved.trusted);
    assert_eq!(identity.store_name, "Uniqlo");
    assert_eq!(identity.brand_name, "Uniqlo");
    assert_eq!(identity.sku.as_deref(), Some("475053"));
    assert_eq!(identity.origin_region, MarketRegion::Au);
    assert_eq!(identity.gender_category, GenderCategory::Mens);
    assert_eq!(identity.name, "AIRism Cotton Oversized Crew Neck T-Shirt");
}

#[test]
fn test_nike_style_code_from_meta() {
    let resolved = NIKE_JP.resolve().unwrap();
    let identity = &resolved.identity;

    assert!(resolved.trusted);
    assert_eq!(identity.brand_name, "Nike");
    assert_eq!(identity.sku.as_deref(), Some("HV0950-234"));
    assert_eq!(identity.origin_region, MarketRegion::Jp);
    assert_eq!(identity.gender_category, GenderCategory::Mens);
}

#[test]
fn test_kmart_keycode_from_url() {
    let resolved = KMART_AU.resolve().unwrap();
    let identity = &resolved.identity;

    assert!(resolved.trusted);
    assert_eq!(identity.brand_name, "Kmart");
    assert_eq!(identity.sku.as_deref(), Some("S169486"));
    assert_eq!(identity.origin_region, MarketRegion::Au);
    assert_eq!(identity.gender_category, GenderCategory::Womens);
    assert_eq!(identity.name, "Rib Tank");
}

#[test]
fn test_asos_brand_from_title() {
    let resolved = ASOS_US.resolve().unwrap();
    let identity = &resolved.identity;

    assert!(resolved.trusted);
    assert_eq!(identity.store_name, "Asos");
    assert_eq!(identity.brand_name, "Asos Design");
    assert_eq!(identity.sku.as_deref(), Some("204957063"));
    assert_eq!(identity.origin_region, MarketRegion::Us);
    assert_eq!(identity.gender_category, GenderCategory::Mens);
}

#[test]
fn test_hm_microdata_breadcrumbs() {
    let resolved = HM_UK.resolve().unwrap();
    let identity = &resolved.identity;

    assert!(resolved.trusted);
    assert_eq!(identity.store_name, "H&M");
    assert_eq!(identity.brand_name, "H&M");
    assert_eq!(identity.origin_region, MarketRegion::Uk);
    assert_eq!(identity.gender_category, GenderCategory::Womens);
    assert_eq!(identity.name, "Linen-blend dress");
}

// =============================================================================
// Retailer Overrides
// =============================================================================

#[test]
fn test_amazon_brand_is_unknown_and_untrusted() {
    let resolved = AMAZON_US.resolve().unwrap();

    assert_eq!(resolved.identity.brand_name, "Unknown");
    assert_eq!(resolved.identity.sku.as_deref(), Some("B0CX1ABCDE"));
    assert!(!resolved.trusted);
}

#[test]
fn test_zara_sku_is_unknown() {
    let resolved = ZARA_AU.resolve().unwrap();

    assert_eq!(resolved.identity.brand_name, "Zara");
    assert_eq!(resolved.identity.sku.as_deref(), Some("Unknown"));
    assert_eq!(resolved.identity.gender_category, GenderCategory::Unknown);
    assert!(resolved.trusted);
}

#[test]
fn test_missing_sku_is_untrusted() {
    let resolved = BIGW_AU.resolve().unwrap();

    assert_eq!(resolved.identity.brand_name, "Big W");
    assert_eq!(resolved.identity.sku, None);
    assert!(!resolved.trusted);
}

// =============================================================================
// Output Shape
// =============================================================================

#[test]
fn test_resolved_product_json() {
    let resolved = KMART_AU.resolve().unwrap();
    let json = serde_json::to_value(&resolved).unwrap();

    assert_eq!(json["trusted"], true);
    assert_eq!(json["identity"]["brand_name"], "Kmart");
    assert_eq!(json["identity"]["origin_region"], "AU");
    assert_eq!(json["identity"]["gender_category"], "womens");
}
