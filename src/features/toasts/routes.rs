use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::features::toasts::handlers::{create_toast, dismiss_toast, list_toasts};
use crate::features::toasts::services::ToastService;

/// Create routes for the toast notification feature
pub fn routes(toast_service: Arc<ToastService>) -> Router {
    Router::new()
        .route("/api/toasts", get(list_toasts).post(create_toast))
        .route("/api/toasts/{id}", delete(dismiss_toast))
        .with_state(toast_service)
}
