//! A [`Color`] holds one color as RGB, HSV and hexadecimal at the same time
//! and keeps all three in sync whenever one of them is changed.

use std::{fmt, str::FromStr};

use crate::{
    convert::util,
    error::{ColorError, Result},
    hex,
    math::{self, almost_zero, normalize_hue},
    models::{rgb_to_string, Hsv, Rgb},
};

/// A 64-bit floating point value that all components are stored as.
///
/// Integer results are truncated from these values, so single precision
/// would drop whole steps where the exact result is an integer.
pub type Component = f64;

/// Three components describing a color in some notation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Components(pub Component, pub Component, pub Component);

/// A color that can be read and changed as RGB, HSV or hex.
///
/// RGB is stored as fractions of whole 8-bit channels. HSV is stored with
/// full precision, so setting a single HSV component does not lose the
/// others to rounding. The hex string is cached.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    rgb: Components,
    hsv: Components,
    hex: String,
}

impl Color {
    /// Create a new [`Color`] from RGB channels. Missing channels default to
    /// 0:
    /// ```rust
    /// use tricolor::Color;
    /// let c = Color::new(255, None, None);
    /// assert_eq!(c.hex(), "#ff0000");
    /// ```
    pub fn new(
        red: impl Into<Option<u8>>,
        green: impl Into<Option<u8>>,
        blue: impl Into<Option<u8>>,
    ) -> Self {
        Self::from_rgb(
            red.into().unwrap_or(0),
            green.into().unwrap_or(0),
            blue.into().unwrap_or(0),
        )
    }

    /// Create a new [`Color`] from RGB channels.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::with_rgb(Rgb::new(red, green, blue))
    }

    /// Create a new [`Color`] from a hex string with 3 or 6 digits. The
    /// leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::with_rgb(hex::hex_to_rgb(hex)?))
    }

    /// Create a new [`Color`] from a hue in degrees and saturation and value
    /// percentages.
    pub fn from_hsv(hue: u16, saturation: u8, value: u8) -> Self {
        Self::with_hsv(Hsv::new(hue, saturation, value).to_components())
    }

    fn with_rgb(rgb: Rgb) -> Self {
        let mut color = Self {
            rgb: rgb.to_components(),
            hsv: Components(0.0, 0.0, 0.0),
            hex: String::new(),
        };
        color.sync_from_rgb();
        color
    }

    fn with_hsv(hsv: Components) -> Self {
        let mut color = Self {
            rgb: Components(0.0, 0.0, 0.0),
            hsv,
            hex: String::new(),
        };
        color.sync_from_hsv();
        color
    }

    /// Recompute HSV and hex after RGB changed.
    fn sync_from_rgb(&mut self) {
        self.hsv = util::rgb_to_hsv(&self.rgb);
        self.hex = hex::rgb_to_hex(self.rgb());
    }

    /// Recompute RGB and hex after HSV changed. Channels are truncated to
    /// whole values, matching [`hsv_to_rgb`](crate::hsv_to_rgb).
    fn sync_from_hsv(&mut self) {
        let rgb = Rgb::truncate_components(&util::hsv_to_rgb(&self.hsv));
        self.rgb = rgb.to_components();
        self.hex = hex::rgb_to_hex(rgb);
    }

    /// Return the RGB channels.
    pub fn rgb(&self) -> Rgb {
        Rgb::round_components(&self.rgb)
    }

    /// Return the red channel.
    pub fn red(&self) -> u8 {
        self.rgb().red
    }

    /// Return the green channel.
    pub fn green(&self) -> u8 {
        self.rgb().green
    }

    /// Return the blue channel.
    pub fn blue(&self) -> u8 {
        self.rgb().blue
    }

    /// Set all three RGB channels.
    pub fn set_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
        self.rgb = Rgb::new(red, green, blue).to_components();
        self.sync_from_rgb();
        self
    }

    /// Set all three RGB channels to the same level.
    pub fn set_gray(&mut self, level: u8) -> &mut Self {
        self.set_rgb(level, level, level)
    }

    /// Set the red channel.
    pub fn set_red(&mut self, red: u8) -> &mut Self {
        self.rgb.0 = math::from_channel(red);
        self.sync_from_rgb();
        self
    }

    /// Set the green channel.
    pub fn set_green(&mut self, green: u8) -> &mut Self {
        self.rgb.1 = math::from_channel(green);
        self.sync_from_rgb();
        self
    }

    /// Set the blue channel.
    pub fn set_blue(&mut self, blue: u8) -> &mut Self {
        self.rgb.2 = math::from_channel(blue);
        self.sync_from_rgb();
        self
    }

    /// Return the hue in whole degrees and saturation and value in whole
    /// percentages.
    pub fn hsv(&self) -> Hsv {
        Hsv::from_components(&self.hsv)
    }

    /// Return the hue in whole degrees, truncated.
    pub fn hue(&self) -> u16 {
        self.hsv().hue
    }

    /// Return the saturation as a rounded percentage.
    pub fn saturation(&self) -> u8 {
        self.hsv().saturation
    }

    /// Return the value (brightness) as a rounded percentage.
    pub fn value(&self) -> u8 {
        self.hsv().value
    }

    /// Set the hue in degrees and saturation and value as percentages. The
    /// hue wraps at 360 and percentages above 100 are clamped.
    pub fn set_hsv(&mut self, hue: u16, saturation: u8, value: u8) -> &mut Self {
        self.hsv = Hsv::new(hue, saturation, value).to_components();
        self.sync_from_hsv();
        self
    }

    /// Set the hue in degrees. It wraps at 360.
    pub fn set_hue(&mut self, hue: u16) -> &mut Self {
        self.hsv.0 = normalize_hue(hue as Component);
        self.sync_from_hsv();
        self
    }

    /// Set the saturation as a percentage, clamped to 100.
    pub fn set_saturation(&mut self, saturation: u8) -> &mut Self {
        self.hsv.1 = math::from_percent(saturation);
        self.sync_from_hsv();
        self
    }

    /// Set the value (brightness) as a percentage, clamped to 100.
    pub fn set_value(&mut self, value: u8) -> &mut Self {
        self.hsv.2 = math::from_percent(value);
        self.sync_from_hsv();
        self
    }

    /// Return the color as `#` followed by 6 lowercase hex digits.
    pub fn hex(&self) -> String {
        format!("#{}", self.hex)
    }

    /// Set the color from a hex string with 3 or 6 digits and an optional
    /// leading `#`. The color is left untouched when the string is invalid.
    ///
    /// HSV is recomputed from the parsed channels, so after an HSV setter
    /// even the color's own hex can change [`hsv`](Self::hsv): the channels
    /// were truncated and no longer carry the exact saturation and value.
    pub fn set_hex(&mut self, hex: &str) -> Result<&mut Self> {
        let hex = hex::validate_hex(hex)?;
        let rgb = hex::hex_to_rgb(&hex)?;

        self.rgb = rgb.to_components();
        self.hsv = util::rgb_to_hsv(&self.rgb);
        self.hex = hex;
        Ok(self)
    }

    /// Return a new color on the opposite side of the hue circle.
    ///
    /// Value and saturation are adjusted as well, so that the complement of
    /// a light tint is a dark shade and white and black swap.
    pub fn complement(&self) -> Color {
        let Components(hue, saturation, value) = self.hsv;

        let hue = if hue >= 180.0 { hue - 180.0 } else { hue + 180.0 };
        let new_value = value * (saturation - 1.0) + 1.0;
        let new_saturation = if almost_zero(new_value) {
            0.0
        } else {
            value * saturation / new_value
        };

        Color::with_hsv(Components(hue, new_saturation, new_value))
    }

    /// Format the RGB channels as `rgba(r,g,b)`.
    pub fn to_rgb_string(&self) -> String {
        rgb_to_string(self.rgb())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb(0, 0, 0)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::with_rgb(value)
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        Self::with_hsv(value.to_components())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn default_is_black() {
        let color = Color::default();
        assert_eq!(color.rgb(), Rgb::new(0, 0, 0));
        assert_eq!(color.hsv(), Hsv::new(0, 0, 0));
        assert_eq!(color.hex(), "#000000");
        assert_eq!(Color::new(None, None, None), color);
    }

    #[test]
    fn missing_channels_default_to_zero() {
        assert_eq!(Color::new(255, None, None).rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Color::new(1, 2, None).rgb(), Rgb::new(1, 2, 0));
        assert_eq!(Color::new(None, 255, None).hex(), "#00ff00");
    }

    #[test]
    fn create_from_hex() {
        let color = Color::from_hex("#ff0000").unwrap();
        assert_eq!(color.hsv().to_tuple(), (0, 100, 100));
        assert_eq!(color.rgb().to_tuple(), (255, 0, 0));

        assert_eq!(Color::from_hex("#abc").unwrap().hex(), "#aabbcc");
        assert_eq!(Color::from_hex("FF8800").unwrap().hex(), "#ff8800");
        assert_eq!("#00f".parse::<Color>().unwrap().blue(), 255);
    }

    #[test]
    fn create_from_rgb() {
        let color = Color::new(0, 255, 0);
        assert_eq!(color.hex(), "#00ff00");
        assert_eq!(color.hsv(), Hsv::new(120, 100, 100));
        assert_eq!(Color::from(Rgb::new(0, 255, 0)), color);
    }

    #[test]
    fn create_from_hsv() {
        let color = Color::from_hsv(240, 100, 100);
        assert_eq!(color.hex(), "#0000ff");
        assert_eq!(Color::from(Hsv::new(240, 100, 100)), color);
    }

    #[test]
    fn invalid_hex_is_reported() {
        assert_eq!(
            Color::from_hex("#1234"),
            Err(ColorError::Format {
                hex: "1234".to_string()
            })
        );
        assert!(matches!(
            "#zzzzzz".parse::<Color>(),
            Err(ColorError::Parse { .. })
        ));
    }

    #[test]
    fn rgb_setters_update_hsv_and_hex() {
        let mut color = Color::default();

        color.set_rgb(255, 0, 0);
        assert_eq!(color.hsv(), Hsv::new(0, 100, 100));
        assert_eq!(color.hex(), "#ff0000");

        color.set_blue(255);
        assert_eq!(color.rgb(), Rgb::new(255, 0, 255));
        assert_eq!(color.hsv(), Hsv::new(300, 100, 100));
        assert_eq!(color.hex(), "#ff00ff");

        color.set_red(0).set_green(255);
        assert_eq!(color.hex(), "#00ffff");
        assert_eq!(color.hue(), 180);
        assert_eq!((color.red(), color.green(), color.blue()), (0, 255, 255));
    }

    #[test]
    fn gray_sets_every_channel() {
        let mut color = Color::from_rgb(10, 20, 30);
        color.set_gray(128);
        assert_eq!(color.rgb(), Rgb::new(128, 128, 128));
        assert_eq!(color.hsv(), Hsv::new(0, 0, 50));
        assert_eq!(color.hex(), "#808080");
    }

    #[test]
    fn hsv_setters_update_rgb_and_hex() {
        let mut color = Color::from_hex("#ff0000").unwrap();

        color.set_value(50);
        assert_eq!(color.rgb(), Rgb::new(127, 0, 0));
        assert_eq!(color.hex(), "#7f0000");
        assert_eq!(color.hsv(), Hsv::new(0, 100, 50));
        assert_eq!(color.value(), 50);

        color.set_value(100).set_saturation(0);
        assert_eq!(color.hex(), "#ffffff");
        assert_eq!(color.saturation(), 0);

        color.set_hsv(240, 100, 100);
        assert_eq!(color.hex(), "#0000ff");
        assert_eq!(color.rgb(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hue_setter_wraps_and_keeps_precision() {
        let mut color = Color::from_rgb(255, 0, 0);
        color.set_hue(480);
        assert_eq!(color.hue(), 120);
        assert_eq!(color.hex(), "#00ff00");

        // saturation and value keep their fractions through a hue change
        let mut color = Color::from_rgb(40, 200, 100);
        let before = color.hsv;
        color.set_hue(10);
        assert_component_eq!(color.hsv.1, before.1);
        assert_component_eq!(color.hsv.2, before.2);
    }

    #[test]
    fn failed_hex_leaves_color_untouched() {
        let mut color = Color::from_rgb(10, 20, 30);
        let before = color.clone();

        assert!(matches!(
            color.set_hex("#1234"),
            Err(ColorError::Format { .. })
        ));
        assert_eq!(color, before);

        assert!(matches!(
            color.set_hex("#gg0000"),
            Err(ColorError::Parse { .. })
        ));
        assert_eq!(color, before);
    }

    #[test]
    fn setting_own_hex_is_idempotent() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8)] = &[
            (0, 0, 0), (255, 255, 255), (128, 128, 128),
            (255, 0, 0), (40, 200, 100), (17, 99, 201), (250, 3, 77),
        ];

        for &(red, green, blue) in TESTS {
            let mut color = Color::from_rgb(red, green, blue);
            let before = color.clone();
            let hex = color.hex();
            color.set_hex(&hex).unwrap();
            assert_eq!(color, before);
        }
    }

    #[test]
    fn own_hex_after_hsv_setter_recomputes_hsv() {
        let mut color = Color::from_hsv(0, 1, 2);
        assert_eq!(color.hex(), "#050505");
        assert_eq!(color.hsv(), Hsv::new(0, 1, 2));

        color.set_hex("#050505").unwrap();
        assert_eq!(color.rgb(), Rgb::new(5, 5, 5));
        assert_eq!(color.hsv(), Hsv::new(0, 0, 2));
    }

    #[test]
    fn whole_hues_are_not_truncated_away() {
        assert_eq!(Color::from_rgb(0, 5, 6).hue(), 190);
        assert_eq!(Color::from_rgb(35, 30, 33).hue(), 324);
        assert_eq!(Color::from_rgb(36, 31, 33).hue(), 335);
        assert_eq!(Color::from_hsv(0, 60, 50).rgb(), Rgb::new(127, 51, 51));
    }

    #[test]
    fn set_hex_replaces_everything() {
        let mut color = Color::from_hsv(60, 50, 50);
        color.set_hex("0f0").unwrap();
        assert_eq!(color.rgb(), Rgb::new(0, 255, 0));
        assert_eq!(color.hsv(), Hsv::new(120, 100, 100));
        assert_eq!(color.hex(), "#00ff00");
    }

    #[test]
    fn complement_rotates_hue() {
        let red = Color::from_rgb(255, 0, 0);
        let cyan = red.complement();
        assert_eq!(cyan.hsv(), Hsv::new(180, 100, 100));
        assert_eq!(cyan.hex(), "#00ffff");

        let yellow = Color::from_rgb(0, 0, 255).complement();
        assert_eq!(yellow.hue(), 60);
        assert_eq!(yellow.hex(), "#ffff00");

        // the source color is untouched
        assert_eq!(red.hex(), "#ff0000");
    }

    #[test]
    fn complement_swaps_black_and_white() {
        let white = Color::from_rgb(255, 255, 255);
        assert_eq!(white.complement().hex(), "#000000");
        assert_eq!(white.complement().saturation(), 0);

        let black = Color::default();
        assert_eq!(black.complement().hex(), "#ffffff");
    }

    #[test]
    fn complement_adjusts_saturation_and_value() {
        // hsv(0, 50%, 80%) -> value 0.8 * -0.5 + 1 = 0.6, saturation 0.4 / 0.6
        let color = Color::from_hsv(0, 50, 80);
        let complement = color.complement();
        assert_component_eq!(complement.hsv.0, 180.0);
        assert_component_eq!(complement.hsv.1, 0.4 / 0.6);
        assert_component_eq!(complement.hsv.2, 0.6);
        assert_eq!(complement.hsv(), Hsv::new(180, 67, 60));
    }

    #[test]
    fn string_forms() {
        let color = Color::from_rgb(255, 136, 0);
        assert_eq!(color.to_rgb_string(), "rgba(255,136,0)");
        assert_eq!(color.to_string(), "#ff8800");
    }
}
