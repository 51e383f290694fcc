pub mod comment_handler;

pub use comment_handler::{__path_create_comment, __path_list_comments, create_comment, list_comments};
