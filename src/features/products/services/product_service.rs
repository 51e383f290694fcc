use std::sync::Arc;
use tracing::debug;

use crate::core::config::CatalogConfig;
use crate::core::error::{AppError, Result};
use crate::features::products::clients::ProductCatalog;
use crate::features::products::dtos::{ProductFeedDto, ProductPageDto, ProductSearchDto};
use crate::features::products::services::SearchDebouncer;

/// Pagination, infinite scroll and debounced search over a product catalog
pub struct ProductService {
    catalog: Arc<dyn ProductCatalog>,
    page_size: u32,
    debouncer: SearchDebouncer,
}

impl ProductService {
    pub fn new(catalog: Arc<dyn ProductCatalog>, config: &CatalogConfig) -> Self {
        Self {
            catalog,
            page_size: config.page_size,
            debouncer: SearchDebouncer::new(config.search_debounce),
        }
    }

    /// Fetch page `page` (1-indexed)
    pub async fn page(&self, page: u32) -> Result<ProductPageDto> {
        let page = page.max(1);
        let skip = (page - 1).saturating_mul(self.page_size);

        let slice = self.catalog.list(skip, self.page_size).await?;
        let total_pages = slice.total.div_ceil(self.page_size);

        Ok(ProductPageDto {
            products: slice.products,
            page,
            page_size: self.page_size,
            total: slice.total,
            total_pages,
        })
    }

    /// Fetch the batch starting at `skip` and say whether more remain
    pub async fn feed(&self, skip: u32) -> Result<ProductFeedDto> {
        let slice = self.catalog.list(skip, self.page_size).await?;

        let next_skip = skip.saturating_add(slice.products.len() as u32);
        let has_more = !slice.products.is_empty() && next_skip < slice.total;

        Ok(ProductFeedDto {
            products: slice.products,
            next_skip,
            has_more,
        })
    }

    /// Search once `client` has stopped typing.
    ///
    /// Returns `Conflict` when a newer search from the same client replaced
    /// this one during the quiet period.
    pub async fn search(&self, client: &str, query: &str) -> Result<ProductSearchDto> {
        if !self.debouncer.settle(client).await {
            debug!("Search '{}' from {} superseded", query, client);
            return Err(AppError::Conflict(
                "Search superseded by a newer query".to_string(),
            ));
        }

        let query = query.trim();
        if query.is_empty() {
            return Ok(ProductSearchDto {
                query: String::new(),
                products: Vec::new(),
                total: 0,
            });
        }

        let found = self.catalog.search(query).await?;
        debug!("Search '{}' matched {} products", query, found.total);

        Ok(ProductSearchDto {
            query: query.to_string(),
            products: found.products,
            total: found.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::products::clients::StubCatalog;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn service_with(catalog: Arc<StubCatalog>, debounce_ms: u64) -> ProductService {
        let config = CatalogConfig {
            search_debounce: Duration::from_millis(debounce_ms),
            ..CatalogConfig::default()
        };
        ProductService::new(catalog, &config)
    }

    #[tokio::test]
    async fn test_page_math() {
        let service = service_with(Arc::new(StubCatalog::with_products(194)), 0);

        let first = service.page(1).await.unwrap();
        assert_eq!(first.products.len(), 10);
        assert_eq!(first.products[0].id, 1);
        assert_eq!(first.total_pages, 20);

        let last = service.page(20).await.unwrap();
        assert_eq!(last.products.len(), 4);
        assert_eq!(last.products[0].id, 191);

        let beyond = service.page(21).await.unwrap();
        assert!(beyond.products.is_empty());
    }

    #[tokio::test]
    async fn test_feed_reports_end_of_catalog() {
        let service = service_with(Arc::new(StubCatalog::with_products(25)), 0);

        let mut skip = 0;
        let mut seen = 0;
        loop {
            let batch = service.feed(skip).await.unwrap();
            seen += batch.products.len();
            skip = batch.next_skip;
            if !batch.has_more {
                break;
            }
        }

        assert_eq!(seen, 25);
        assert_eq!(skip, 25);

        let past_end = service.feed(25).await.unwrap();
        assert!(past_end.products.is_empty());
        assert!(!past_end.has_more);
        assert_eq!(past_end.next_skip, 25);
    }

    #[tokio::test]
    async fn test_blank_search_skips_upstream() {
        let catalog = Arc::new(StubCatalog::with_products(5));
        let service = service_with(Arc::clone(&catalog), 0);

        let result = service.search("client", "   ").await.unwrap();
        assert!(result.products.is_empty());
        assert_eq!(catalog.searches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_searches_only_send_the_last() {
        let catalog = Arc::new(StubCatalog::with_products(10));
        let service = service_with(Arc::clone(&catalog), 300);

        let typing = service.search("client", "lap");
        let settled = async {
            tokio::time::sleep(Duration::from_millis(120)).await;
            service.search("client", "laptops").await
        };

        let (typing, settled) = tokio::join!(typing, settled);
        assert!(matches!(typing, Err(AppError::Conflict(_))));

        let settled = settled.unwrap();
        assert_eq!(settled.query, "laptops");
        assert_eq!(settled.total, 5);
        assert_eq!(catalog.searches.load(Ordering::SeqCst), 1);
    }
}
