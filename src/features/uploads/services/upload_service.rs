use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::config::UploadConfig;
use crate::core::error::{AppError, Result};
use crate::features::uploads::dtos::{FileRecordDto, UploadResponseDto};
use crate::features::uploads::models::FileRecord;

const RANDOM_SUFFIX_LEN: usize = 13;

/// Stores uploaded images on local disk and remembers what was stored
pub struct UploadService {
    dir: PathBuf,
    public_path: String,
    max_bytes: usize,
    records: RwLock<Vec<FileRecord>>,
}

impl UploadService {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            public_path: config.public_path.clone(),
            max_bytes: config.max_bytes,
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    pub fn size_limit_message(&self) -> String {
        format!(
            "File size must be less than {}MB",
            self.max_bytes / (1024 * 1024)
        )
    }

    /// Check type before size, matching the order the upload form reports errors in
    pub fn check(&self, content_type: &str, size: usize) -> Result<()> {
        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(
                "Only image files are allowed".to_string(),
            ));
        }
        if size > self.max_bytes {
            return Err(AppError::BadRequest(self.size_limit_message()));
        }
        Ok(())
    }

    /// Validate, write to disk and register an upload
    pub async fn store(
        &self,
        original_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<UploadResponseDto> {
        self.check(content_type, data.len())?;

        let now = Utc::now();
        let timestamp = now.timestamp_millis();
        let random = random_suffix();
        let filename = format!("{}_{}{}", timestamp, random, extension_of(original_name));

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&filename), data).await?;
        debug!("Wrote {} bytes to {}", data.len(), filename);

        let record = FileRecord {
            id: format!("file_{}_{}", timestamp, random),
            path: format!("{}/{}", self.public_path, filename),
            filename,
            original_name: original_name.to_string(),
            size: data.len() as u64,
            mime_type: content_type.to_string(),
            upload_date: now,
        };
        let response = UploadResponseDto::from(&record);

        let total = {
            let mut records = self
                .records
                .write()
                .map_err(|_| AppError::Internal("Upload registry lock poisoned".to_string()))?;
            records.push(record);
            records.len()
        };

        info!(
            "File uploaded: id={}, path={}, size={} ({} files stored)",
            response.id, response.path, response.size, total
        );
        Ok(response)
    }

    /// Everything uploaded since startup, oldest first
    pub fn list(&self) -> Result<Vec<FileRecordDto>> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Internal("Upload registry lock poisoned".to_string()))?;
        Ok(records.iter().map(FileRecordDto::from).collect())
    }
}

fn random_suffix() -> String {
    let mut random = Uuid::new_v4().simple().to_string();
    random.truncate(RANDOM_SUFFIX_LEN);
    random
}

/// Extension of `name` including the leading dot, or empty.
/// Only alphanumeric extensions are kept so the stored name stays a plain file name.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn temp_config() -> UploadConfig {
        UploadConfig {
            dir: std::env::temp_dir().join(format!("uploads-{}", Uuid::new_v4().simple())),
            max_bytes: 5 * 1024 * 1024,
            public_path: "/uploads".to_string(),
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("cat.png"), ".png");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".hidden"), "");
        assert_eq!(extension_of("bad.p/ng"), "");
    }

    #[test]
    fn test_check_order() {
        let service = UploadService::new(&temp_config());
        let too_big = 5 * 1024 * 1024 + 1;

        let err = service.check("application/pdf", too_big).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "Only image files are allowed"));

        let err = service.check("image/png", too_big).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "File size must be less than 5MB"));

        assert!(service.check("image/png", 5 * 1024 * 1024).is_ok());
    }

    #[tokio::test]
    async fn test_store_writes_file_and_registers_it() {
        let config = temp_config();
        let service = UploadService::new(&config);

        let response = service
            .store("photo.jpg", "image/jpeg", b"not really a jpeg")
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.filename, "photo.jpg");
        assert_eq!(response.size, 17);
        assert!(response.id.starts_with("file_"));
        assert!(response.path.starts_with("/uploads/"));
        assert!(response.path.ends_with(".jpg"));

        let listed = service.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].original_name, "photo.jpg");
        assert_eq!(listed[0].mime_type, "image/jpeg");
        assert_eq!(listed[0].id, format!("file_{}", listed[0].filename.trim_end_matches(".jpg")));

        let on_disk = tokio::fs::read(config.dir.join(&listed[0].filename)).await.unwrap();
        assert_eq!(on_disk, b"not really a jpeg");

        let _ = tokio::fs::remove_dir_all(&config.dir).await;
    }
}
