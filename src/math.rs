//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

/// Wrap `value` into the range `[0, period)`.
pub fn wrap<T: Float>(value: T, period: T) -> T {
    let wrapped = value % period;
    let wrapped = if wrapped < T::zero() {
        wrapped + period
    } else {
        wrapped
    };

    // A tiny negative remainder can round up to exactly `period`.
    if wrapped >= period {
        wrapped - period
    } else {
        wrapped
    }
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    wrap(hue, 360.0)
}

/// Fraction in `[0, 1]` for a 0-255 channel.
pub fn from_channel(channel: u8) -> Component {
    channel as Component / 255.0
}

/// Scale a fraction to a 0-255 channel, rounding to the nearest integer.
pub fn round_channel(fraction: Component) -> u8 {
    (fraction * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Scale a fraction to a 0-255 channel, dropping the fractional part.
pub fn truncate_channel(fraction: Component) -> u8 {
    (fraction * 255.0).clamp(0.0, 255.0) as u8
}

/// Fraction in `[0, 1]` for a percentage. Anything above 100 is clamped.
pub fn from_percent(percent: u8) -> Component {
    percent.min(100) as Component / 100.0
}

/// Scale a fraction to a percentage, rounding to the nearest integer.
pub fn round_percent(fraction: Component) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}
