use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::not_blank;

/// A comment with its replies nested in submission order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[schema(no_recursion)]
    pub replies: Vec<CommentDto>,
}

/// Request DTO for posting a comment or a reply
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    #[validate(custom(function = "not_blank", message = "Comment text is required"))]
    pub text: String,
    /// Comment being replied to; omit to start a new thread
    pub parent_id: Option<u64>,
}
