// Numeral parsing: decimal, Roman, and the Arabic/Roman fallback helper

use crate::roman;

/// Error type for numeral text that cannot be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralParseError {
    #[error("empty numeral")]
    Empty,
    #[error("invalid digit {ch:?} in numeral {text:?}")]
    InvalidDigit { text: String, ch: char },
    #[error("numeral {0:?} is out of range")]
    Overflow(String),
    #[error("invalid half-integer {0:?}")]
    InvalidHalfInteger(String),
    #[error("unknown numbering kind {0:?}")]
    UnknownKind(String),
    #[error("unknown pagination mode {0:?}")]
    UnknownMode(String),
}

/// Largest value a numeral in a specification may have (the `i32` range).
///
/// Counters are kept in `i64`, so starting values and the distances between
/// them stay far from overflow.
pub const MAX_NUMERAL: i64 = i32::MAX as i64;

/// Parse a run of ASCII digits as a base-10 integer no greater than
/// [`MAX_NUMERAL`].
pub fn parse_decimal(text: &str) -> Result<i64, NumeralParseError> {
    if text.is_empty() {
        return Err(NumeralParseError::Empty);
    }
    if let Some(ch) = text.chars().find(|c| !c.is_ascii_digit()) {
        return Err(NumeralParseError::InvalidDigit {
            text: text.to_string(),
            ch,
        });
    }
    text.parse::<i64>()
        .ok()
        .filter(|&value| value <= MAX_NUMERAL)
        .ok_or_else(|| NumeralParseError::Overflow(text.to_string()))
}

/// Parse a user-supplied start value, trying decimal digits first and Roman
/// numerals (either case) second.
///
/// Surrounding whitespace is ignored. Used by the initializer encoder, where a
/// user may type "7", "vii" or "VII" for the same value.
pub fn parse_numeral(text: &str) -> Result<i64, NumeralParseError> {
    let text = text.trim();
    match parse_decimal(text) {
        Ok(value) => Ok(value),
        Err(NumeralParseError::Overflow(t)) => Err(NumeralParseError::Overflow(t)),
        Err(_) => roman::decode(text),
    }
}
