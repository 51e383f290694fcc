use chrono::{DateTime, Utc};

/// An uploaded image as kept in the in-memory registry
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// `file_{timestamp_ms}_{random}`
    pub id: String,
    /// Name the bytes were written under, `{timestamp_ms}_{random}{.ext}`
    pub filename: String,
    pub original_name: String,
    /// Public URL path the file is served from
    pub path: String,
    pub size: u64,
    pub mime_type: String,
    pub upload_date: DateTime<Utc>,
}
