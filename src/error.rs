//! Error types for parsing and constructing colors.

use thiserror::Error;

/// Result type alias for fallible color operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors that can occur when building or updating a color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex input does not have 3 or 6 digits after the optional `#`.
    #[error("incorrect hex format: \"{hex}\"")]
    Format {
        /// The input with any leading `#` removed.
        hex: String,
    },

    /// Hex input has the right length but is not made of hex digits.
    #[error("can't convert hex to rgb: #{hex}")]
    Parse {
        /// The normalized 6 character input.
        hex: String,
    },

    /// An RGB channel does not fit in `0..=255`.
    #[error("{channel} channel out of range: {value}")]
    OutOfRange {
        /// Name of the offending channel.
        channel: &'static str,
        /// The rejected value.
        value: i32,
    },
}
