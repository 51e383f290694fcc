mod toast_service;

pub use toast_service::ToastService;
