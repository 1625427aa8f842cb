//! Model a color with the HSV notation as whole degrees and percentages.

use crate::{
    color::{Component, Components},
    math,
};

tricolor_macros::gen_model! {
    /// A color specified with a hue in degrees and saturation and value as
    /// percentages.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Hsv {
        /// The hue in degrees, `0..360`.
        hue: u16,
        /// The saturation as a percentage, `0..=100`.
        saturation: u8,
        /// The value (brightness) as a percentage, `0..=100`.
        value: u8,
    }
}

impl Hsv {
    /// Hue wraps around at 360 and percentages above 100 are clamped.
    pub(crate) fn to_components(self) -> Components {
        Components(
            math::normalize_hue(self.hue as Component),
            math::from_percent(self.saturation),
            math::from_percent(self.value),
        )
    }

    /// The hue is truncated to a whole degree, saturation and value are
    /// rounded to whole percentages.
    pub(crate) fn from_components(from: &Components) -> Self {
        Self::new(
            math::normalize_hue(from.0) as u16,
            math::round_percent(from.1),
            math::round_percent(from.2),
        )
    }
}
