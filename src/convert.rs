//! Conversions between the RGB, HSV and hexadecimal forms of a color.
//!
//! The public functions work on whole channels, degrees and percentages.
//! The same math on fractions lives in `util`, which is what
//! [`Color`](crate::Color) uses so that no precision is lost while it keeps
//! its representations in sync.
//!
//! NOTE: HSV to RGB truncates each channel instead of rounding, and RGB to
//!       HSV truncates the hue. Existing consumers depend on the exact
//!       numbers, so the math runs in `f64` with the operations in a fixed
//!       order.
//!
//! Round trips:
//! - through `util`, RGB to HSV and back truncates to within 1 of every
//!   channel.
//! - through [`rgb_to_hsv`] and [`hsv_to_rgb`], whole degrees and
//!   percentages lose more: a channel can come back up to 6 lower or
//!   higher, e.g. `(0, 251, 230)` returns as `(0, 249, 224)`.

use crate::{
    error::Result,
    hex,
    models::{Hsv, Rgb},
};

/// Convert RGB channels to HSV. The hue is truncated to a whole degree,
/// saturation and value are rounded to whole percentages.
pub fn rgb_to_hsv(rgb: impl Into<Rgb>) -> Hsv {
    Hsv::from_components(&util::rgb_to_hsv(&rgb.into().to_components()))
}

/// Convert HSV to RGB channels. The hue wraps around at 360 degrees and
/// percentages above 100 are clamped.
pub fn hsv_to_rgb(hsv: impl Into<Hsv>) -> Rgb {
    Rgb::truncate_components(&util::hsv_to_rgb(&hsv.into().to_components()))
}

/// Convert a hex string, with or without `#`, to HSV.
pub fn hex_to_hsv(hex: &str) -> Result<Hsv> {
    Ok(rgb_to_hsv(hex::hex_to_rgb(hex)?))
}

/// Convert HSV to 6 lowercase hex digits with no `#`.
pub fn hsv_to_hex(hsv: impl Into<Hsv>) -> String {
    hex::rgb_to_hex(hsv_to_rgb(hsv))
}

pub(crate) mod util {
    use crate::{
        color::Components,
        math::{almost_zero, normalize_hue},
    };

    /// Convert RGB fractions to a hue in degrees and saturation and value
    /// fractions. Achromatic colors get a hue of 0.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let value = max;
        let saturation = if almost_zero(max) { 0.0 } else { 1.0 - min / max };

        if almost_zero(delta) {
            return Components(0.0, saturation, value);
        }

        let sector = if max == red {
            (green - blue) / delta
        } else if max == green {
            2.0 + (blue - red) / delta
        } else {
            4.0 + (red - green) / delta
        };

        // Scale before wrapping; wrapping the sector first rounds differently.
        let hue = sector * 60.0;
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        Components(normalize_hue(hue), saturation, value)
    }

    /// Convert a hue in degrees and saturation and value fractions to RGB
    /// fractions.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        if almost_zero(value) || almost_zero(saturation) {
            return Components(value, value, value);
        }

        let sector = normalize_hue(hue) / 60.0;
        let i = sector.floor();
        let f = sector - i;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));

        match i as u8 % 6 {
            0 => Components(value, t, p),
            1 => Components(q, value, p),
            2 => Components(p, value, t),
            3 => Components(p, q, value),
            4 => Components(t, p, value),
            _ => Components(value, p, q),
        }
    }
}
