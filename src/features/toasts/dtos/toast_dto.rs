use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::toasts::models::{Toast, ToastKind};
use crate::shared::validation::not_blank;

/// How long a toast stays up when the caller doesn't say
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Request DTO for raising a toast
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateToastDto {
    pub kind: ToastKind,
    #[validate(length(min = 1, max = 500, message = "message must be 1-500 characters"))]
    #[validate(custom(function = "not_blank", message = "message must not be blank"))]
    pub message: String,
    /// Auto-dismiss delay in milliseconds (default: 3000)
    #[validate(range(min = 1, max = 60000, message = "durationMs must be between 1 and 60000"))]
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToastDto {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<&Toast> for ToastDto {
    fn from(toast: &Toast) -> Self {
        Self {
            id: toast.id,
            kind: toast.kind,
            message: toast.message.clone(),
            created_at: toast.created_at,
            expires_at: toast.expires_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DismissToastResponseDto {
    pub dismissed: bool,
}
