mod comment;

pub use comment::{CommentForest, CommentNode, InsertError};
