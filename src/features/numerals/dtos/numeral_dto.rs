use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for converting a number to Roman numerals
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ConvertNumberDto {
    /// Number between 1 and 100
    #[schema(example = 42)]
    pub number: i64,
}

/// A number alongside its Roman numeral spelling
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RomanNumeralDto {
    pub number: u32,
    #[schema(example = "XLII")]
    pub roman: String,
}
