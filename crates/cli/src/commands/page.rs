//! Product page commands: resolve and ingest.
//!
//! Both take a URL plus the page HTML saved to disk; fetching is left to
//! whatever produced the file.

use std::path::Path;

use serde::Serialize;
use url::Url;

use fitview_core::Product;
use fitview_ingest::db::{PgProductStore, create_pool};
use fitview_ingest::{HtmlDocument, IdempotencyGate, IngestConfig, ResolvedProduct, resolve_identity};

use super::{CommandError, emit};

#[derive(Serialize)]
struct IngestReport {
    created: bool,
    product: Product,
}

/// Resolve a saved page and print the identity.
pub async fn resolve(url: &str, html: &Path) -> Result<(), CommandError> {
    let resolved = resolve_page(url, html).await?;
    emit(&resolved)
}

/// Resolve a saved page and store it through the idempotency gate.
pub async fn ingest(url: &str, html: &Path) -> Result<(), CommandError> {
    let config = IngestConfig::from_env()?;
    let resolved = resolve_page(url, html).await?;

    tracing::info!("Connecting to database...");
    let pool = create_pool(&config.database_url, config.max_connections).await?;
    let gate = IdempotencyGate::new(PgProductStore::new(pool));

    let outcome = gate.admit(&resolved).await?;
    let created = outcome.is_created();
    emit(&IngestReport {
        created,
        product: outcome.into_product(),
    })
}

async fn resolve_page(url: &str, html: &Path) -> Result<ResolvedProduct, CommandError> {
    let url = Url::parse(url)?;
    let source = tokio::fs::read_to_string(html).await?;
    // HtmlDocument is not Send; keep it out of any await.
    let doc = HtmlDocument::parse(&source);
    Ok(resolve_identity(&url, &doc))
}
