use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::comments::handlers::{create_comment, list_comments};
use crate::features::comments::services::CommentService;

/// Create routes for the nested comments feature
pub fn routes(comment_service: Arc<CommentService>) -> Router {
    Router::new()
        .route("/api/comments", get(list_comments).post(create_comment))
        .with_state(comment_service)
}
