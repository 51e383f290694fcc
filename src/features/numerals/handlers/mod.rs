pub mod numeral_handler;

pub use numeral_handler::{__path_convert_to_roman, __path_parse_roman, convert_to_roman, parse_roman};
