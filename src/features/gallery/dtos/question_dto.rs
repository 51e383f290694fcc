use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::gallery::models::QuestionCard;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionCardDto {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Front-end page that hosts the solution
    pub route: String,
    pub endpoints: Vec<String>,
}

impl From<&QuestionCard> for QuestionCardDto {
    fn from(card: &QuestionCard) -> Self {
        Self {
            id: card.id,
            title: card.title.to_string(),
            description: card.description.to_string(),
            route: card.route.to_string(),
            endpoints: card.endpoints.iter().map(|e| e.to_string()).collect(),
        }
    }
}
