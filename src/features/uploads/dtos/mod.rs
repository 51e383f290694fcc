mod upload_dto;

pub use upload_dto::{FileRecordDto, UploadImageDto, UploadResponseDto};
