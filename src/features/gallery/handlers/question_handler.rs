use axum::Json;

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::gallery::dtos::QuestionCardDto;
use crate::features::gallery::services::{find_question, list_questions};
use crate::shared::types::{ApiResponse, Meta};

/// List every assessment question on the landing page
#[utoipa::path(
    get,
    path = "/api/questions",
    tag = "gallery",
    responses(
        (status = 200, description = "All question cards", body = ApiResponse<Vec<QuestionCardDto>>)
    )
)]
pub async fn list_question_cards() -> Result<Json<ApiResponse<Vec<QuestionCardDto>>>> {
    let cards = list_questions();
    let total = cards.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(cards),
        None,
        Some(Meta { total }),
    )))
}

/// Get one question card
#[utoipa::path(
    get,
    path = "/api/questions/{id}",
    tag = "gallery",
    params(
        ("id" = u32, Path, description = "Question number (1-10)")
    ),
    responses(
        (status = 200, description = "Question card", body = ApiResponse<QuestionCardDto>),
        (status = 404, description = "No such question")
    )
)]
pub async fn get_question_card(
    AppPath(id): AppPath<u32>,
) -> Result<Json<ApiResponse<QuestionCardDto>>> {
    let card = find_question(id)?;
    Ok(Json(ApiResponse::success(Some(card), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::gallery::routes;
    use axum::http::StatusCode;
    use crate::shared::types::ErrorResponse;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_list_and_get() {
        let server = TestServer::new(routes()).unwrap();

        let listed: ApiResponse<Vec<QuestionCardDto>> = server.get("/api/questions").await.json();
        assert_eq!(listed.meta.unwrap().total, 10);

        let card: ApiResponse<QuestionCardDto> = server.get("/api/questions/8").await.json();
        let card = card.data.unwrap();
        assert_eq!(card.title, "Nested Comments");
        assert_eq!(card.endpoints, vec!["GET /api/comments", "POST /api/comments"]);
    }

    #[tokio::test]
    async fn test_unknown_question_is_404() {
        let server = TestServer::new(routes()).unwrap();
        server
            .get("/api/questions/42")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_numeric_id_gets_json_error() {
        let server = TestServer::new(routes()).unwrap();

        let response = server.get("/api/questions/abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(!response.json::<ErrorResponse>().success);
    }
}
