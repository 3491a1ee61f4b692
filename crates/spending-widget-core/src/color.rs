//! Color representation shared by the chart renderer and the view bindings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    ///
    /// ```
    /// use spending_widget_core::Color;
    ///
    /// let coral = Color::from_argb(0xFFFF_8A65);
    /// assert_eq!(coral.to_argb(), 0xFFFF_8A65);
    /// assert_eq!(coral.to_hex(), "#ff8a65");
    /// ```
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as f32 / 255.0,
            g: ((argb >> 8) & 0xFF) as f32 / 255.0,
            b: (argb & 0xFF) as f32 / 255.0,
            a: ((argb >> 24) & 0xFF) as f32 / 255.0,
        }
    }

    /// Pack into `0xAARRGGBB`.
    #[must_use]
    pub fn to_argb(&self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Components as 8-bit channels in RGBA order.
    #[must_use]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b),
            Self::channel(self.a),
        ]
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }

        let byte = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or(ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::from_rgba8(byte(0..2)?, byte(2..4)?, byte(4..6)?, 0xFF)),
            8 => Ok(Self::from_rgba8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Create a color from 8-bit channels.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Convert to hex string with alpha.
    #[must_use]
    pub fn to_hex_with_alpha(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// Scale the alpha channel by `factor`, truncating to an 8-bit step.
    ///
    /// Truncation matches how packed ARGB hosts apply a fractional alpha, so
    /// an opaque color at 0.7 lands on `0xB2`, not `0xB3`.
    #[must_use]
    pub fn scale_alpha(&self, factor: f32) -> Self {
        let alpha = (f32::from(Self::channel(self.a)) * factor.clamp(0.0, 1.0)).trunc();
        Self {
            a: alpha / 255.0,
            ..*self
        }
    }

    fn channel(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters")]
    InvalidHex,
    /// Invalid string length
    #[error("invalid hex string length (expected 6 or 8)")]
    InvalidLength,
}
