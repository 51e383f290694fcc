use thiserror::Error;

/// Smallest number the converter accepts
pub const MIN_CONVERTIBLE: u32 = 1;
/// Largest number the converter accepts
pub const MAX_CONVERTIBLE: u32 = 100;

/// Largest value expressible in standard notation
const MAX_PARSEABLE: u32 = 3999;

/// Greedy table, largest value first, subtractive pairs included
const SYMBOLS: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanError {
    #[error("Please enter a number between 1 and 100")]
    OutOfRange(i64),

    #[error("'{0}' is not a valid Roman numeral")]
    Invalid(String),
}

/// Convert `n` (1..=100) to Roman numerals
pub fn to_roman(n: i64) -> Result<String, RomanError> {
    if n < MIN_CONVERTIBLE as i64 || n > MAX_CONVERTIBLE as i64 {
        return Err(RomanError::OutOfRange(n));
    }
    Ok(encode(n as u32))
}

fn encode(mut remaining: u32) -> String {
    let mut out = String::new();
    for &(value, symbol) in SYMBOLS {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    out
}

fn symbol_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Parse a numeral written in standard subtractive notation.
///
/// Case-insensitive. Non-canonical spellings such as `IIII` or `IC` are
/// rejected: the value must re-encode to exactly the given symbols.
pub fn from_roman(input: &str) -> Result<u32, RomanError> {
    let normalized = input.trim().to_ascii_uppercase();
    let invalid = || RomanError::Invalid(input.to_string());

    let values = normalized
        .chars()
        .map(symbol_value)
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(invalid)?;
    if values.is_empty() {
        return Err(invalid());
    }

    // A symbol followed by a larger one is subtracted from the running total
    let mut total: i64 = 0;
    for (i, &value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if next > value => total -= i64::from(value),
            _ => total += i64::from(value),
        }
    }

    let total = u32::try_from(total).map_err(|_| invalid())?;
    if total == 0 || total > MAX_PARSEABLE || encode(total) != normalized {
        return Err(invalid());
    }
    Ok(total)
}
