//! tricolor provides a color value that is readable and writable as RGB, HSV
//! and hexadecimal at the same time, along with the conversion functions
//! between those forms.
//!
//! ```rust
//! use tricolor::Color;
//!
//! let mut color = Color::from_hex("#ff0000").unwrap();
//! assert_eq!(color.hsv().to_tuple(), (0, 100, 100));
//!
//! color.set_hue(120);
//! assert_eq!(color.hex(), "#00ff00");
//! assert_eq!(color.complement().hex(), "#ff00ff");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hex;
mod math;
mod models;


pub use color::{Color, Component};
pub use convert::{hex_to_hsv, hsv_to_hex, hsv_to_rgb, rgb_to_hsv};
pub use error::{ColorError, Result};
pub use hex::{hex_to_rgb, rgb_to_hex, validate_hex};
pub use models::{rgb_to_string, Hsv, Rgb};
