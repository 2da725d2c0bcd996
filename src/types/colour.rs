//! Colour type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB colour with channels in `[0, 1]`.
///
/// Opacity is not part of the colour; layers carry their own alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    /// Create a colour, clamping each channel to `[0, 1]`.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp01(r),
            g: clamp01(g),
            b: clamp01(b),
        }
    }

    /// A neutral grey with all channels set to `value`.
    pub fn grey(value: f64) -> Self {
        Self::rgb(value, value, value)
    }

    const fn raw(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::raw(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::raw(1.0, 1.0, 1.0);

    /// Channels as an array, in r, g, b order.
    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Quantize to 8-bit channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        self.channels().map(|c| (c * 255.0).round() as u8)
    }

    /// Linear interpolation towards `other` (`t = 0` is `self`).
    pub fn lerp(self, other: Colour, t: f64) -> Colour {
        let t = clamp01(t);
        Colour::rgb(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// Clamp a channel value to `[0, 1]`. NaN maps to 0.
pub(crate) fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}
