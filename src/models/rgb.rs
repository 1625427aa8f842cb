//! Model a color as 8-bit red, green and blue channels.

use std::fmt;

use crate::{
    color::Components,
    error::{ColorError, Result},
    math,
};

tricolor_macros::gen_model! {
    /// A color specified with red, green and blue channels in `0..=255`.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl Rgb {
    /// Return the channels as an array.
    pub const fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub(crate) fn to_components(self) -> Components {
        Components(
            math::from_channel(self.red),
            math::from_channel(self.green),
            math::from_channel(self.blue),
        )
    }

    /// Quantize fractions by rounding. Used where the fractions are known
    /// to be whole channels already.
    pub(crate) fn round_components(from: &Components) -> Self {
        Self::new(
            math::round_channel(from.0),
            math::round_channel(from.1),
            math::round_channel(from.2),
        )
    }

    /// Quantize fractions by truncation, the way HSV input is scaled.
    pub(crate) fn truncate_components(from: &Components) -> Self {
        Self::new(
            math::truncate_channel(from.0),
            math::truncate_channel(from.1),
            math::truncate_channel(from.2),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.to_array()
    }
}

impl TryFrom<[i32; 3]> for Rgb {
    type Error = ColorError;

    fn try_from([red, green, blue]: [i32; 3]) -> Result<Self> {
        let channel = |channel: &'static str, value: i32| {
            u8::try_from(value).map_err(|_| ColorError::OutOfRange { channel, value })
        };

        Ok(Self::new(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        ))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{})", self.red, self.green, self.blue)
    }
}

/// Format RGB channels as `rgba(r,g,b)`.
///
/// No alpha is written despite the `rgba` prefix; consumers depend on this
/// exact format.
pub fn rgb_to_string(rgb: impl Into<Rgb>) -> String {
    rgb.into().to_string()
}
