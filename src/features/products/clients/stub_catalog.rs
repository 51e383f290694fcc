use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::error::Result;
use crate::features::products::clients::ProductCatalog;
use crate::features::products::models::{CatalogPage, Product};

/// In-process catalog of `total` numbered products
pub struct StubCatalog {
    products: Vec<Product>,
    pub searches: AtomicUsize,
}

impl StubCatalog {
    pub fn with_products(total: u64) -> Self {
        let products = (1..=total)
            .map(|id| Product {
                id,
                title: format!("Product {}", id),
                description: None,
                price: Some(id as f64 * 1.5),
                discount_percentage: None,
                rating: None,
                brand: None,
                category: Some(if id % 2 == 0 { "phones" } else { "laptops" }.to_string()),
                thumbnail: None,
            })
            .collect();

        Self {
            products,
            searches: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ProductCatalog for StubCatalog {
    async fn list(&self, skip: u32, limit: u32) -> Result<CatalogPage> {
        let products: Vec<Product> = self
            .products
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(CatalogPage {
            products,
            total: self.products.len() as u32,
        })
    }

    async fn search(&self, query: &str) -> Result<CatalogPage> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        let products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.category.as_deref() == Some(query))
            .cloned()
            .collect();
        let total = products.len() as u32;

        Ok(CatalogPage { products, total })
    }
}
