//! Product identity types.
//!
//! A [`ProductIdentity`] is what the resolution pipeline produces from a
//! retailer page. Once it carries a SKU, `(brand_name, sku)` is its dedup key
//! and it can be stored as a [`Product`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::region::MarketRegion;

/// Demographic category a garment is sold under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenderCategory {
    Mens,
    Womens,
    Unisex,
    #[default]
    Unknown,
}

impl GenderCategory {
    /// Label shown to shoppers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mens => "Men",
            Self::Womens => "Women",
            Self::Unisex => "Unisex",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for GenderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mens => write!(f, "mens"),
            Self::Womens => write!(f, "womens"),
            Self::Unisex => write!(f, "unisex"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for GenderCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mens" => Ok(Self::Mens),
            "womens" => Ok(Self::Womens),
            "unisex" => Ok(Self::Unisex),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("invalid gender category: {s}")),
        }
    }
}

/// Canonical identity of a product resolved from a retailer page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIdentity {
    pub brand_name: String,
    /// Manufacturer identifier. `None` or empty means the identity cannot be verified.
    pub sku: Option<String>,
    pub store_name: String,
    pub gender_category: GenderCategory,
    pub origin_region: MarketRegion,
    pub original_url: String,
    pub name: String,
}

impl ProductIdentity {
    /// The `(brand, sku)` dedup key, if a non-empty SKU was resolved.
    #[must_use]
    pub fn dedup_key(&self) -> Option<(&str, &str)> {
        self.sku
            .as_deref()
            .filter(|sku| !sku.is_empty())
            .map(|sku| (self.brand_name.as_str(), sku))
    }
}

/// A stored product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub brand_name: String,
    pub sku: String,
    pub store_name: String,
    pub name: String,
    pub gender_category: GenderCategory,
    pub origin_region: MarketRegion,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Build a new record from a verified identity.
    ///
    /// Returns `None` when the identity has no usable SKU.
    #[must_use]
    pub fn from_identity(identity: &ProductIdentity) -> Option<Self> {
        let (brand_name, sku) = identity.dedup_key()?;
        Some(Self {
            id: ProductId::generate(),
            brand_name: brand_name.to_owned(),
            sku: sku.to_owned(),
            store_name: identity.store_name.clone(),
            name: identity.name.clone(),
            gender_category: identity.gender_category,
            origin_region: identity.origin_region,
            original_url: identity.original_url.clone(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn identity(sku: Option<&str>) -> ProductIdentity {
        ProductIdentity {
            brand_name: "Nike".to_owned(),
            sku: sku.map(str::to_owned),
            store_name: "Nike".to_owned(),
            gender_category: GenderCategory::Mens,
            origin_region: MarketRegion::Jp,
            original_url: "https://www.nike.com/jp/t/HV0950-234".to_owned(),
            name: "Tech Fleece Windrunner".to_owned(),
        }
    }

    #[test]
    fn test_dedup_key_requires_non_empty_sku() {
        assert_eq!(identity(None).dedup_key(), None);
        assert_eq!(identity(Some("")).dedup_key(), None);
        assert_eq!(
            identity(Some("HV0950-234")).dedup_key(),
            Some(("Nike", "HV0950-234"))
        );
    }

    #[test]
    fn test_product_from_identity() {
        assert!(Product::from_identity(&identity(None)).is_none());

        let product = Product::from_identity(&identity(Some("HV0950-234"))).unwrap();
        assert_eq!(product.sku, "HV0950-234");
        assert_eq!(product.origin_region, MarketRegion::Jp);
        assert_eq!(product.gender_category, GenderCategory::Mens);
    }

    #[test]
    fn test_gender_round_trips_through_str() {
        for gender in [
            GenderCategory::Mens,
            GenderCategory::Womens,
            GenderCategory::Unisex,
            GenderCategory::Unknown,
        ] {
            assert_eq!(gender.to_string().parse::<GenderCategory>().unwrap(), gender);
        }
    }
}
