use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::products::models::CatalogPage;

/// Read-only access to a product catalog
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// `limit` products starting at offset `skip`
    async fn list(&self, skip: u32, limit: u32) -> Result<CatalogPage>;

    /// Free-text search over the catalog
    async fn search(&self, query: &str) -> Result<CatalogPage>;
}
