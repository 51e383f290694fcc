use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::features::uploads::handlers::{list_uploads, upload_image};
use crate::features::uploads::services::UploadService;

/// Create routes for image uploads and previews
pub fn routes(upload_service: Arc<UploadService>) -> Router {
    let previews = ServeDir::new(upload_service.dir());
    let public_path = upload_service.public_path().to_string();

    Router::new()
        .route(
            "/api/upload",
            // Allow body size up to the file limit + buffer for multipart overhead
            post(upload_image)
                .layer(DefaultBodyLimit::max(upload_service.max_bytes() + 1024 * 1024)),
        )
        .route("/api/uploads", get(list_uploads))
        .nest_service(&public_path, previews)
        .with_state(upload_service)
}
