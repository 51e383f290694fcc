pub mod limited_handler;

pub use limited_handler::{__path_limited, limited};
