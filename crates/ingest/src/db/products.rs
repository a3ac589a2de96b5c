//! Product repository backed by the `products` table.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use fitview_core::{GenderCategory, MarketRegion, Product, ProductId};

use crate::error::RepositoryError;
use crate::gate::ProductStore;

const SELECT_BY_BRAND_AND_SKU: &str = r"
    SELECT id, brand_name, sku, store_name, name, gender_category,
           origin_region, original_url, created_at
    FROM products
    WHERE brand_name = $1 AND sku = $2
";

const INSERT_PRODUCT: &str = r"
    INSERT INTO products (id, brand_name, sku, store_name, name, gender_category,
                          origin_region, original_url, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
    RETURNING id, brand_name, sku, store_name, name, gender_category,
              origin_region, original_url, created_at
";

#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    brand_name: String,
    sku: String,
    store_name: String,
    name: String,
    gender_category: String,
    origin_region: String,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let gender_category = row.gender_category.parse::<GenderCategory>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid gender in database: {e}"))
        })?;
        let origin_region = row.origin_region.parse::<MarketRegion>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid region in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            brand_name: row.brand_name,
            sku: row.sku,
            store_name: row.store_name,
            name: row.name,
            gender_category,
            origin_region,
            original_url: row.original_url,
            created_at: row.created_at,
        })
    }
}

/// [`ProductStore`] over a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductStore for PgProductStore {
    async fn find_by_brand_and_sku(
        &self,
        brand_name: &str,
        sku: &str,
    ) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(SELECT_BY_BRAND_AND_SKU)
            .bind(brand_name)
            .bind(sku)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    async fn insert(&self, product: &Product) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(INSERT_PRODUCT)
            .bind(product.id)
            .bind(&product.brand_name)
            .bind(&product.sku)
            .bind(&product.store_name)
            .bind(&product.name)
            .bind(product.gender_category.to_string())
            .bind(product.origin_region.code())
            .bind(&product.original_url)
            .bind(product.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict(format!(
                        "product {} / {} already exists",
                        product.brand_name, product.sku
                    ));
                }
                RepositoryError::Database(e)
            })?;

        Product::try_from(row)
    }
}
