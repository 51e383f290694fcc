use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of an admitted request to the rate-limited endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LimitedResponseDto {
    pub message: String,
    /// Position of this request within the current window (1-based)
    pub request_number: u32,
    /// Requests still allowed before the window resets
    pub remaining_requests: u32,
    /// When the window resets (RFC 3339)
    #[schema(example = "2026-01-01T12:01:00.000Z")]
    pub reset_time: String,
}
