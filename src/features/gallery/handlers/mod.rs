pub mod question_handler;

pub use question_handler::{
    __path_get_question_card, __path_list_question_cards, get_question_card, list_question_cards,
};
