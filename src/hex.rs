//! Validation and conversion of hexadecimal color strings.

use crate::{
    error::{ColorError, Result},
    models::Rgb,
};

/// Strip an optional leading `#` and expand 3 digit shorthand, returning a 6
/// character lowercase string.
///
/// Only the length is checked here. Whether the characters are hex digits is
/// checked by [`hex_to_rgb`].
pub fn validate_hex(input: &str) -> Result<String> {
    let hex = input.strip_prefix('#').unwrap_or(input);

    match hex.chars().count() {
        6 => Ok(hex.to_ascii_lowercase()),
        3 => Ok(hex
            .chars()
            .flat_map(|digit| [digit, digit])
            .collect::<String>()
            .to_ascii_lowercase()),
        _ => Err(ColorError::Format {
            hex: hex.to_string(),
        }),
    }
}

/// Parse a 3 or 6 digit hex string, with or without a leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let hex = validate_hex(hex)?;

    // `from_str_radix` would accept a leading sign, so check the digits first.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::Parse { hex });
    }

    let channel = |at: usize| {
        u8::from_str_radix(&hex[at..at + 2], 16)
            .map_err(|_| ColorError::Parse { hex: hex.clone() })
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format RGB channels as 6 lowercase hex digits with no `#`.
pub fn rgb_to_hex(rgb: impl Into<Rgb>) -> String {
    let Rgb { red, green, blue } = rgb.into();
    format!("{red:02x}{green:02x}{blue:02x}")
}
