use axum::{
    extract::{multipart::MultipartError, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppMultipart;
use crate::features::uploads::dtos::{FileRecordDto, UploadImageDto, UploadResponseDto};
use crate::features::uploads::services::UploadService;
use crate::shared::types::{ApiResponse, Meta};

/// Upload an image
///
/// Accepts multipart/form-data with a single `file` field. Only image types
/// up to the configured size are stored.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "uploads",
    request_body(
        content = UploadImageDto,
        content_type = "multipart/form-data",
        description = "Image upload form",
    ),
    responses(
        (status = 200, description = "File uploaded successfully", body = UploadResponseDto),
        (status = 400, description = "Not a multipart form, no file, not an image, or too large"),
        (status = 500, description = "Failed to upload file")
    )
)]
pub async fn upload_image(
    State(service): State<Arc<UploadService>>,
    AppMultipart(mut multipart): AppMultipart,
) -> Result<Json<UploadResponseDto>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&service, e))?
    {
        if field.name() != Some("file") {
            debug!("Ignoring multipart field {:?}", field.name());
            continue;
        }

        let original_name = field.file_name().unwrap_or("unnamed").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        // Type is checked before the body is buffered
        service.check(&content_type, 0)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(&service, e))?;

        let response = service.store(&original_name, &content_type, &data).await?;
        return Ok(Json(response));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}

fn multipart_error(service: &UploadService, e: MultipartError) -> AppError {
    debug!("Failed to read multipart data: {}", e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::BadRequest(service.size_limit_message())
    } else {
        AppError::BadRequest(format!("Failed to read multipart data: {}", e.body_text()))
    }
}

/// List files uploaded since startup
#[utoipa::path(
    get,
    path = "/api/uploads",
    tag = "uploads",
    responses(
        (status = 200, description = "Uploaded files, oldest first", body = ApiResponse<Vec<FileRecordDto>>)
    )
)]
pub async fn list_uploads(
    State(service): State<Arc<UploadService>>,
) -> Result<Json<ApiResponse<Vec<FileRecordDto>>>> {
    let files = service.list()?;
    let total = files.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(files),
        None,
        Some(Meta { total }),
    )))
}
