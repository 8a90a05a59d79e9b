//! Error types for color parsing.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when a textual color identifier cannot be parsed.
///
/// Identifiers are either hex strings (`#RGB`, `#RRGGBB`, `#RRGGBBAA`, the
/// hash being optional) or CSS basic color names.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 digits after stripping '#')
    #[error("invalid hex color length (expected 3, 6 or 8 digits)")]
    InvalidLength,

    /// Character outside `0-9a-fA-F` in a hex string
    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),

    /// Hex digits that do not form a channel value
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),

    /// Not a hex string and not a known color name
    #[error("unknown color name: {0}")]
    UnknownName(String),
}
