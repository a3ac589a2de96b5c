//! Find-or-create admission of resolved products.
//!
//! The check-then-insert sequence is not atomic. Two requests for the same
//! `(brand_name, sku)` can both miss on the lookup; the store's uniqueness
//! constraint rejects the second insert with [`RepositoryError::Conflict`],
//! and the gate answers that by re-reading the winner's record.

use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use fitview_core::{Product, ProductIdentity};

use crate::error::{IngestError, RepositoryError};
use crate::pipeline::ResolvedProduct;

/// Persistence collaborator for the gate.
///
/// Implementations must enforce uniqueness on `(brand_name, sku)` and report a
/// duplicate insert as [`RepositoryError::Conflict`].
pub trait ProductStore: Send + Sync {
    /// Exact-match lookup on brand and SKU.
    fn find_by_brand_and_sku(
        &self,
        brand_name: &str,
        sku: &str,
    ) -> impl Future<Output = Result<Option<Product>, RepositoryError>> + Send;

    /// Store a new product and return the stored record.
    fn insert(
        &self,
        product: &Product,
    ) -> impl Future<Output = Result<Product, RepositoryError>> + Send;
}

/// In-process [`ProductStore`] for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl MemoryProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored product, in insertion order.
    pub async fn all(&self) -> Vec<Product> {
        self.products.lock().await.clone()
    }
}

impl ProductStore for MemoryProductStore {
    async fn find_by_brand_and_sku(
        &self,
        brand_name: &str,
        sku: &str,
    ) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.lock().await;
        Ok(products
            .iter()
            .find(|p| p.brand_name == brand_name && p.sku == sku)
            .cloned())
    }

    async fn insert(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().await;
        if products
            .iter()
            .any(|p| p.brand_name == product.brand_name && p.sku == product.sku)
        {
            return Err(RepositoryError::Conflict(format!(
                "product {} / {} already exists",
                product.brand_name, product.sku
            )));
        }
        products.push(product.clone());
        Ok(product.clone())
    }
}

/// Result of admitting an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// A record with the same brand and SKU was already stored.
    Existing(Product),
    /// A new record was written.
    Created(Product),
}

impl GateOutcome {
    #[must_use]
    pub const fn product(&self) -> &Product {
        match self {
            Self::Existing(product) | Self::Created(product) => product,
        }
    }

    #[must_use]
    pub fn into_product(self) -> Product {
        match self {
            Self::Existing(product) | Self::Created(product) => product,
        }
    }

    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Deduplicating entry point into a [`ProductStore`].
#[derive(Debug)]
pub struct IdempotencyGate<S> {
    store: S,
}

impl<S: ProductStore> IdempotencyGate<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Admit a pipeline result, rejecting identities that failed validation.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Untrusted` for unvalidated products, otherwise
    /// whatever [`Self::find_or_create`] returns.
    pub async fn admit(&self, resolved: &ResolvedProduct) -> Result<GateOutcome, IngestError> {
        if !resolved.trusted {
            return Err(IngestError::Untrusted(resolved.identity.original_url.clone()));
        }
        self.find_or_create(&resolved.identity).await
    }

    /// Return the stored product for this identity, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::MissingSku` if the identity has no usable SKU and
    /// `IngestError::Repository` if the store fails.
    #[instrument(skip_all, fields(brand = %identity.brand_name, sku = ?identity.sku))]
    pub async fn find_or_create(
        &self,
        identity: &ProductIdentity,
    ) -> Result<GateOutcome, IngestError> {
        let Some((brand_name, sku)) = identity.dedup_key() else {
            return Err(IngestError::MissingSku(identity.original_url.clone()));
        };

        if let Some(existing) = self.store.find_by_brand_and_sku(brand_name, sku).await? {
            debug!(product_id = %existing.id, "Product already stored");
            return Ok(GateOutcome::Existing(existing));
        }

        let product = Product::from_identity(identity)
            .ok_or_else(|| IngestError::MissingSku(identity.original_url.clone()))?;

        match self.store.insert(&product).await {
            Ok(created) => {
                info!(product_id = %created.id, "Product created");
                Ok(GateOutcome::Created(created))
            }
            Err(RepositoryError::Conflict(reason)) => {
                debug!(%reason, "Lost insert race, re-reading");
                self.store
                    .find_by_brand_and_sku(brand_name, sku)
                    .await?
                    .map(GateOutcome::Existing)
                    .ok_or_else(|| RepositoryError::NotFound.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use fitview_core::{GenderCategory, MarketRegion};

    use super::*;

    fn identity(brand: &str, sku: Option<&str>) -> ProductIdentity {
        ProductIdentity {
            brand_name: brand.to_owned(),
            sku: sku.map(str::to_owned),
            store_name: "Uniqlo".to_owned(),
            gender_category: GenderCategory::Unisex,
            origin_region: MarketRegion::Au,
            original_url: "https://www.uniqlo.com/au/en/products/E475053-000/00".to_owned(),
            name: "AIRism Cotton Oversized T-Shirt".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_second_request_returns_first_record() {
        let gate = IdempotencyGate::new(MemoryProductStore::new());

        let first = gate.find_or_create(&identity("Uniqlo", Some("475053"))).await.unwrap();
        let second = gate.find_or_create(&identity("Uniqlo", Some("475053"))).await.unwrap();

        assert!(first.is_created());
        assert!(!second.is_created());
        assert_eq!(first.product(), second.product());
        assert_eq!(gate.store().all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_create_distinct_records() {
        let gate = IdempotencyGate::new(MemoryProductStore::new());

        gate.find_or_create(&identity("Uniqlo", Some("475053"))).await.unwrap();
        gate.find_or_create(&identity("Uniqlo", Some("450535"))).await.unwrap();
        gate.find_or_create(&identity("Nike", Some("475053"))).await.unwrap();

        assert_eq!(gate.store().all().await.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_sku_is_rejected() {
        let gate = IdempotencyGate::new(MemoryProductStore::new());

        let none = gate.find_or_create(&identity("Uniqlo", None)).await.unwrap_err();
        let empty = gate.find_or_create(&identity("Uniqlo", Some(""))).await.unwrap_err();

        assert!(matches!(none, IngestError::MissingSku(_)));
        assert!(matches!(empty, IngestError::MissingSku(_)));
        assert!(gate.store().all().await.is_empty());
    }

    #[tokio::test]
    async fn test_untrusted_is_rejected_before_lookup() {
        let gate = IdempotencyGate::new(MemoryProductStore::new());
        let resolved = ResolvedProduct {
            identity: identity("Unknown", Some("B0CX1")),
            trusted: false,
        };

        let err = gate.admit(&resolved).await.unwrap_err();
        assert!(matches!(err, IngestError::Untrusted(_)));
        assert!(gate.store().all().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_requests_store_one_record() {
        let gate = IdempotencyGate::new(MemoryProductStore::new());
        let wanted = identity("Uniqlo", Some("475053"));

        let (a, b) = tokio::join!(gate.find_or_create(&wanted), gate.find_or_create(&wanted));

        assert_eq!(a.unwrap().product(), b.unwrap().product());
        assert_eq!(gate.store().all().await.len(), 1);
    }

    /// Misses the first lookup, as if a concurrent writer landed in between.
    struct RacingStore {
        inner: MemoryProductStore,
        missed: AtomicBool,
    }

    impl ProductStore for RacingStore {
        async fn find_by_brand_and_sku(
            &self,
            brand_name: &str,
            sku: &str,
        ) -> Result<Option<Product>, RepositoryError> {
            if !self.missed.swap(true, Ordering::SeqCst) {
                return Ok(None);
            }
            self.inner.find_by_brand_and_sku(brand_name, sku).await
        }

        async fn insert(&self, product: &Product) -> Result<Product, RepositoryError> {
            self.inner.insert(product).await
        }
    }

    #[tokio::test]
    async fn test_conflict_triggers_reread() {
        let inner = MemoryProductStore::new();
        let winner = Product::from_identity(&identity("Uniqlo", Some("475053"))).unwrap();
        inner.insert(&winner).await.unwrap();

        let gate = IdempotencyGate::new(RacingStore {
            inner,
            missed: AtomicBool::new(false),
        });

        let outcome = gate.find_or_create(&identity("Uniqlo", Some("475053"))).await.unwrap();
        assert_eq!(outcome, GateOutcome::Existing(winner));
        assert_eq!(gate.store().inner.all().await.len(), 1);
    }
}
