pub mod toast_dto;

pub use toast_dto::{CreateToastDto, DismissToastResponseDto, ToastDto, DEFAULT_TOAST_DURATION_MS};
