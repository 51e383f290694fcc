use axum::Json;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::numerals::dtos::{ConvertNumberDto, RomanNumeralDto};
use crate::features::numerals::services::{from_roman, to_roman};
use crate::shared::types::ApiResponse;

/// Convert a number (1-100) to Roman numerals
#[utoipa::path(
    post,
    path = "/api/numerals/roman",
    tag = "numerals",
    request_body = ConvertNumberDto,
    responses(
        (status = 200, description = "Converted numeral", body = ApiResponse<RomanNumeralDto>),
        (status = 400, description = "Number missing or outside 1-100")
    )
)]
pub async fn convert_to_roman(
    AppJson(dto): AppJson<ConvertNumberDto>,
) -> Result<Json<ApiResponse<RomanNumeralDto>>> {
    let roman = to_roman(dto.number).map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        Some(RomanNumeralDto {
            number: dto.number as u32,
            roman,
        }),
        None,
        None,
    )))
}

/// Read a Roman numeral back into a number
#[utoipa::path(
    get,
    path = "/api/numerals/roman/{numeral}",
    tag = "numerals",
    params(
        ("numeral" = String, Path, description = "Numeral in standard subtractive notation")
    ),
    responses(
        (status = 200, description = "Parsed value", body = ApiResponse<RomanNumeralDto>),
        (status = 400, description = "Not a canonical Roman numeral")
    )
)]
pub async fn parse_roman(
    AppPath(numeral): AppPath<String>,
) -> Result<Json<ApiResponse<RomanNumeralDto>>> {
    let number = from_roman(&numeral).map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        Some(RomanNumeralDto {
            number,
            roman: numeral.trim().to_ascii_uppercase(),
        }),
        None,
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::numerals::routes;
    use crate::shared::types::ErrorResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_convert_returns_numeral() {
        let server = TestServer::new(routes()).unwrap();
        let response = server
            .post("/api/numerals/roman")
            .json(&json!({ "number": 94 }))
            .await;
        response.assert_status_ok();

        let body: ApiResponse<RomanNumeralDto> = response.json();
        assert_eq!(body.data.unwrap().roman, "XCIV");
    }

    #[tokio::test]
    async fn test_convert_out_of_range_is_400() {
        let server = TestServer::new(routes()).unwrap();
        let response = server
            .post("/api/numerals/roman")
            .json(&json!({ "number": 250 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Please enter a number between 1 and 100");
    }

    #[tokio::test]
    async fn test_convert_rejects_non_numeric_input() {
        let server = TestServer::new(routes()).unwrap();
        server
            .post("/api/numerals/roman")
            .json(&json!({ "number": "twelve" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_round_trip() {
        let server = TestServer::new(routes()).unwrap();
        let body: ApiResponse<RomanNumeralDto> =
            server.get("/api/numerals/roman/lxxvii").await.json();
        let data = body.data.unwrap();
        assert_eq!(data.number, 77);
        assert_eq!(data.roman, "LXXVII");

        server
            .get("/api/numerals/roman/IIII")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_subtractive_numerals() {
        let server = TestServer::new(routes()).unwrap();

        for (numeral, expected) in [("XCIX", 99), ("IX", 9), ("xl", 40)] {
            let response = server.get(&format!("/api/numerals/roman/{}", numeral)).await;
            response.assert_status_ok();
            let data = response.json::<ApiResponse<RomanNumeralDto>>().data.unwrap();
            assert_eq!(data.number, expected, "{}", numeral);
        }
    }
}
