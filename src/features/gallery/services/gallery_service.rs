use crate::core::error::{AppError, Result};
use crate::features::gallery::dtos::QuestionCardDto;
use crate::features::gallery::models::QUESTIONS;

pub fn list_questions() -> Vec<QuestionCardDto> {
    QUESTIONS.iter().map(QuestionCardDto::from).collect()
}

pub fn find_question(id: u32) -> Result<QuestionCardDto> {
    QUESTIONS
        .iter()
        .find(|card| card.id == id)
        .map(QuestionCardDto::from)
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))
}
