use async_trait::async_trait;

use crate::core::config::CatalogConfig;
use crate::core::error::{AppError, Result};
use crate::features::products::clients::ProductCatalog;
use crate::features::products::models::CatalogPage;

/// Client for the public dummyjson.com product API
pub struct DummyJsonClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DummyJsonClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent("AssessmentGallery/0.1 (product-catalog)")
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    async fn fetch(&self, url: &str) -> Result<CatalogPage> {
        tracing::debug!("Fetching products: {}", url);

        let response = self.http_client.get(url).send().await.map_err(|e| {
            tracing::warn!("Product catalog request failed: {}", e);
            AppError::ExternalServiceError("Failed to load products. Please try again.".to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Product catalog returned {}",
                status
            )));
        }

        response.json::<CatalogPage>().await.map_err(|e| {
            tracing::warn!("Failed to parse product catalog response: {}", e);
            AppError::ExternalServiceError("Product catalog sent an unreadable response".to_string())
        })
    }
}

#[async_trait]
impl ProductCatalog for DummyJsonClient {
    async fn list(&self, skip: u32, limit: u32) -> Result<CatalogPage> {
        let url = format!("{}/products?limit={}&skip={}", self.base_url, limit, skip);
        self.fetch(&url).await
    }

    async fn search(&self, query: &str) -> Result<CatalogPage> {
        let url = format!(
            "{}/products/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.fetch(&url).await
    }
}
