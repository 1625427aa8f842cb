//! Models are the integer triplets used to pass colors in and out of a
//! [`Color`](crate::Color) and the conversion functions.

mod hsv;
mod rgb;

pub use hsv::Hsv;
pub use rgb::{rgb_to_string, Rgb};
