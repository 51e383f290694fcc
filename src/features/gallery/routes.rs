use axum::{routing::get, Router};

use crate::features::gallery::handlers::{get_question_card, list_question_cards};

/// Create routes for the landing-page gallery
pub fn routes() -> Router {
    Router::new()
        .route("/api/questions", get(list_question_cards))
        .route("/api/questions/{id}", get(get_question_card))
}
