use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use chrono::SecondsFormat;

use crate::core::error::{AppError, Result};
use crate::core::extractor::ClientKey;
use crate::features::rate_limits::dtos::LimitedResponseDto;
use crate::features::rate_limits::models::RateLimitDecision;
use crate::features::rate_limits::services::RateLimitService;
use crate::shared::types::RateLimitErrorResponse;

const LIMIT_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const REMAINING_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
const RESET_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// Call the rate-limited demo API
///
/// Clients are identified by the first `X-Forwarded-For` entry.
#[utoipa::path(
    get,
    path = "/api/limited",
    tag = "rate-limits",
    params(
        ("x-forwarded-for" = Option<String>, Header, description = "Client address used as the limiter key")
    ),
    responses(
        (status = 200, description = "Request admitted", body = LimitedResponseDto),
        (status = 429, description = "Quota for the current window exhausted", body = RateLimitErrorResponse)
    )
)]
pub async fn limited(
    client: ClientKey,
    State(service): State<Arc<RateLimitService>>,
) -> Result<Response> {
    match service.check(client.as_str()) {
        RateLimitDecision::Admitted {
            count,
            remaining,
            reset_at,
        } => {
            let headers = [
                (LIMIT_HEADER, HeaderValue::from(service.max_requests())),
                (REMAINING_HEADER, HeaderValue::from(remaining)),
                (RESET_HEADER, HeaderValue::from(reset_at.timestamp())),
            ];
            let body = LimitedResponseDto {
                message: "Hello! This is a rate-limited API.".to_string(),
                request_number: count,
                remaining_requests: remaining,
                reset_time: reset_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            };

            Ok((headers, Json(body)).into_response())
        }
        RateLimitDecision::Rejected { retry_after, .. } => {
            tracing::info!("Rejected request from {}", client.as_str());
            Err(AppError::RateLimited { retry_after })
        }
    }
}
