use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::products::handlers::{list_products, product_feed, search_products};
use crate::features::products::services::ProductService;

/// Create routes for the paginated, infinite-scroll and search listings
pub fn routes(product_service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/feed", get(product_feed))
        .route("/api/products/search", get(search_products))
        .with_state(product_service)
}
