//! URL + parsed page → canonical product identity.
//!
//! Store, then brand, then SKU, since each detector needs the previous
//! result. Region and gender are independent of those. The validation verdict
//! travels with the identity so the caller can decide whether to persist it.

use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use fitview_core::ProductIdentity;

use crate::detect::{
    detect_brand, detect_gender, detect_region, detect_sku, detect_store, is_product_validated,
};
use crate::document::ProductDocument;

/// Separator between product name and retailer branding in page titles.
const TITLE_SEPARATOR: &str = " | ";

/// Output of [`resolve_identity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProduct {
    pub identity: ProductIdentity,
    /// Whether the identity passed validation and may be persisted.
    pub trusted: bool,
}

/// Resolve a retailer page into a product identity.
///
/// Never fails. An identity without a SKU comes back with `sku: None` and
/// `trusted: false`.
#[instrument(skip_all, fields(url = %url))]
pub fn resolve_identity(url: &Url, doc: &dyn ProductDocument) -> ResolvedProduct {
    let store_name = detect_store(url);
    let brand_name = detect_brand(doc, &store_name);
    let sku = detect_sku(doc, url.as_str(), &brand_name, &store_name).filter(|sku| !sku.is_empty());

    let origin_region = detect_region(url);
    let title = doc.title().unwrap_or_default();
    let gender_category = detect_gender(url, &title, &doc.body_text(), &doc.breadcrumbs());

    let name = product_name(&title);
    let trusted = is_product_validated(sku.as_deref(), &brand_name, &name);

    debug!(
        store = %store_name,
        brand = %brand_name,
        sku = ?sku,
        region = %origin_region,
        gender = %gender_category,
        trusted,
        "Identity resolved"
    );

    ResolvedProduct {
        identity: ProductIdentity {
            brand_name,
            sku,
            store_name,
            gender_category,
            origin_region,
            original_url: url.to_string(),
            name,
        },
        trusted,
    }
}

/// Product name from a page title: everything before the first `" | "`.
fn product_name(title: &str) -> String {
    title
        .split(TITLE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
        .to_owned()
}
