mod roman;

pub use roman::{from_roman, to_roman};
