use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::toasts::dtos::{CreateToastDto, DismissToastResponseDto, ToastDto};
use crate::features::toasts::services::ToastService;
use crate::shared::types::ApiResponse;

/// List toasts currently on screen
#[utoipa::path(
    get,
    path = "/api/toasts",
    tag = "toasts",
    responses(
        (status = 200, description = "Active toasts, oldest first", body = ApiResponse<Vec<ToastDto>>)
    )
)]
pub async fn list_toasts(
    State(service): State<Arc<ToastService>>,
) -> Result<Json<ApiResponse<Vec<ToastDto>>>> {
    let toasts = service.active()?;
    Ok(Json(ApiResponse::success(Some(toasts), None, None)))
}

/// Raise a success, error or info toast
#[utoipa::path(
    post,
    path = "/api/toasts",
    tag = "toasts",
    request_body = CreateToastDto,
    responses(
        (status = 201, description = "Toast raised", body = ApiResponse<ToastDto>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_toast(
    State(service): State<Arc<ToastService>>,
    AppJson(dto): AppJson<CreateToastDto>,
) -> Result<(StatusCode, Json<ApiResponse<ToastDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let toast = service.push(dto.kind, &dto.message, dto.duration_ms)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(toast), None, None)),
    ))
}

/// Dismiss a toast before it expires
#[utoipa::path(
    delete,
    path = "/api/toasts/{id}",
    tag = "toasts",
    params(
        ("id" = Uuid, Path, description = "Toast ID")
    ),
    responses(
        (status = 200, description = "Toast dismissed", body = ApiResponse<DismissToastResponseDto>),
        (status = 404, description = "Toast not found or already expired")
    )
)]
pub async fn dismiss_toast(
    State(service): State<Arc<ToastService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<DismissToastResponseDto>>> {
    service.dismiss(id)?;

    Ok(Json(ApiResponse::success(
        Some(DismissToastResponseDto { dismissed: true }),
        Some("Toast dismissed".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::toasts::models::ToastKind;
    use crate::features::toasts::routes;
    use crate::shared::types::ErrorResponse;
    use axum_test::TestServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_raise_list_and_dismiss() {
        let server = TestServer::new(routes(Arc::new(ToastService::new()))).unwrap();

        let created = server
            .post("/api/toasts")
            .json(&json!({ "kind": "success", "message": "Operation completed", "durationMs": 10000 }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let toast = created.json::<ApiResponse<ToastDto>>().data.unwrap();
        assert_eq!(toast.kind, ToastKind::Success);

        let listed: ApiResponse<Vec<ToastDto>> = server.get("/api/toasts").await.json();
        assert_eq!(listed.data.unwrap().len(), 1);

        server
            .delete(&format!("/api/toasts/{}", toast.id))
            .await
            .assert_status_ok();
        server
            .delete(&format!("/api/toasts/{}", toast.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_toast_id_gets_json_error() {
        let server = TestServer::new(routes(Arc::new(ToastService::new()))).unwrap();

        let response = server.delete("/api/toasts/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_kind_and_empty_message_are_rejected() {
        let server = TestServer::new(routes(Arc::new(ToastService::new()))).unwrap();

        server
            .post("/api/toasts")
            .json(&json!({ "kind": "warning", "message": "hi" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .post("/api/toasts")
            .json(&json!({ "kind": "info", "message": "" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
