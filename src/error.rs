//! Errors of the strict hex parser.

use thiserror::Error;

/// Result type of the strict parsing functions.
pub type Result<T> = std::result::Result<T, ParseHexError>;

/// Reasons [`parse_hex`](crate::hex::parse_hex) rejects a string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseHexError {
    /// Nothing left once the optional `#` is removed.
    #[error("empty hex color")]
    Empty,

    /// Not exactly 6 digits (the count excludes a leading `#`).
    #[error("hex color must have 6 digits, got {0}")]
    InvalidLength(usize),

    /// A character that is not a hexadecimal digit.
    #[error("invalid hex digit at position {position}")]
    InvalidDigit { position: usize },
}
