pub mod upload_handler;

pub use upload_handler::{__path_list_uploads, __path_upload_image, list_uploads, upload_image};
