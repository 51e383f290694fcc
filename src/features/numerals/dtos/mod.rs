pub mod numeral_dto;

pub use numeral_dto::{ConvertNumberDto, RomanNumeralDto};
