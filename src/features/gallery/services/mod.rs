mod gallery_service;

pub use gallery_service::{find_question, list_questions};
