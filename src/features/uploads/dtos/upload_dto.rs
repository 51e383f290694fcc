use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::uploads::models::FileRecord;

/// Upload form for OpenAPI documentation.
/// The handler reads the multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageDto {
    /// Image to upload (any image/* type)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Body returned by a successful upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponseDto {
    pub success: bool,
    pub message: String,
    pub id: String,
    /// Original filename as sent by the client
    pub filename: String,
    /// Public path for previewing the stored file
    pub path: String,
    pub size: u64,
}

impl From<&FileRecord> for UploadResponseDto {
    fn from(record: &FileRecord) -> Self {
        Self {
            success: true,
            message: "File uploaded successfully".to_string(),
            id: record.id.clone(),
            filename: record.original_name.clone(),
            path: record.path.clone(),
            size: record.size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileRecordDto {
    pub id: String,
    pub filename: String,
    pub original_name: String,
    pub path: String,
    pub size: u64,
    pub mime_type: String,
    pub upload_date: DateTime<Utc>,
}

impl From<&FileRecord> for FileRecordDto {
    fn from(record: &FileRecord) -> Self {
        Self {
            id: record.id.clone(),
            filename: record.filename.clone(),
            original_name: record.original_name.clone(),
            path: record.path.clone(),
            size: record.size,
            mime_type: record.mime_type.clone(),
            upload_date: record.upload_date,
        }
    }
}
