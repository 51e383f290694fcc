mod question_card;

pub use question_card::{QuestionCard, QUESTIONS};
