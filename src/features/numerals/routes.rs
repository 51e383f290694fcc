use axum::{
    routing::{get, post},
    Router,
};

use crate::features::numerals::handlers::{convert_to_roman, parse_roman};

/// Create routes for the Roman numeral converter
pub fn routes() -> Router {
    Router::new()
        .route("/api/numerals/roman", post(convert_to_roman))
        .route("/api/numerals/roman/{numeral}", get(parse_roman))
}
