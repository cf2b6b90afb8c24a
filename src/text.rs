//! Text adapters around the integer core.
//!
//! A string becomes one integer per `char` (its Unicode scalar value), and an
//! integer sequence can be rendered as space separated decimals and parsed
//! back. None of this knows about keys; the modulus has to be larger than
//! every codepoint for a message to survive encryption.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("{0} is not a unicode scalar value")]
    InvalidCodepoint(u64),

    #[error("{0:?} is not a non-negative integer")]
    InvalidNumber(String),
}

pub fn to_codepoints(s: &str) -> Vec<u64> {
    s.chars().map(|c| u64::from(u32::from(c))).collect()
}

pub fn from_codepoints(values: &[u64]) -> Result<String, TextError> {
    values
        .iter()
        .map(|&v| {
            u32::try_from(v)
                .ok()
                .and_then(char::from_u32)
                .ok_or(TextError::InvalidCodepoint(v))
        })
        .collect()
}

/// Renders `values` as decimals separated by single spaces.
pub fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses the output of [`join`]. Any run of whitespace separates numbers.
pub fn parse(s: &str) -> Result<Vec<u64>, TextError> {
    s.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| TextError::InvalidNumber(token.to_owned()))
        })
        .collect()
}
