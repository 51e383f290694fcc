use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::comments::dtos::{CommentDto, CreateCommentDto};
use crate::features::comments::services::CommentService;
use crate::shared::types::{ApiResponse, Meta};

/// List the discussion as nested threads
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = "comments",
    responses(
        (status = 200, description = "All threads with nested replies", body = ApiResponse<Vec<CommentDto>>)
    )
)]
pub async fn list_comments(
    State(service): State<Arc<CommentService>>,
) -> Result<Json<ApiResponse<Vec<CommentDto>>>> {
    let (threads, total) = service.list()?;

    Ok(Json(ApiResponse::success(
        Some(threads),
        None,
        Some(Meta {
            total: total as i64,
        }),
    )))
}

/// Post a new comment or reply to an existing one
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "comments",
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = ApiResponse<CommentDto>),
        (status = 400, description = "Blank or oversized text"),
        (status = 404, description = "Parent comment not found")
    )
)]
pub async fn create_comment(
    State(service): State<Arc<CommentService>>,
    AppJson(dto): AppJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<ApiResponse<CommentDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let comment = service.add(&dto.text, dto.parent_id)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(comment), None, None)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::comments::routes;
    use crate::shared::constants::MAX_COMMENT_DEPTH;
    use crate::shared::types::ErrorResponse;
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(CommentService::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_post_reply_then_list_nested() {
        let server = server();

        let root: ApiResponse<CommentDto> = server
            .post("/api/comments")
            .json(&json!({ "text": "Start here" }))
            .await
            .json();
        let root_id = root.data.unwrap().id;

        let response = server
            .post("/api/comments")
            .json(&json!({ "text": "A reply", "parentId": root_id }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let listed: ApiResponse<Vec<CommentDto>> = server.get("/api/comments").await.json();
        let threads = listed.data.unwrap();
        assert_eq!(listed.meta.unwrap().total, 2);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].replies[0].text, "A reply");
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let response = server()
            .post("/api/comments")
            .json(&json!({ "text": "   " }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_parent_is_404() {
        let response = server()
            .post("/api/comments")
            .json(&json!({ "text": "hello", "parentId": 7 }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reply_past_depth_limit_is_400() {
        let server = server();

        let mut parent: u64 = server
            .post("/api/comments")
            .json(&json!({ "text": "root" }))
            .await
            .json::<ApiResponse<CommentDto>>()
            .data
            .unwrap()
            .id;
        for _ in 0..MAX_COMMENT_DEPTH {
            parent = server
                .post("/api/comments")
                .json(&json!({ "text": "reply", "parentId": parent }))
                .await
                .json::<ApiResponse<CommentDto>>()
                .data
                .unwrap()
                .id;
        }

        let response = server
            .post("/api/comments")
            .json(&json!({ "text": "too deep", "parentId": parent }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(!response.json::<ErrorResponse>().success);

        server.get("/api/comments").await.assert_status_ok();
    }
}
