use std::sync::Arc;

use axum::{routing::get, Router};

use super::handlers::limited;
use super::services::RateLimitService;

/// Create routes for the rate-limited demo endpoint
pub fn routes(rate_limit_service: Arc<RateLimitService>) -> Router {
    Router::new()
        .route("/api/limited", get(limited))
        .with_state(rate_limit_service)
}
