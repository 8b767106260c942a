//! Gradient colors and color-scheme resolution.
//!
//! Colors are resolved separately from geometry: switching between light and
//! dark appearance changes the concrete RGBA values of the stops but never the
//! points or locations a transform produces.

use crate::error::GradientError;
use crate::spec::GradientSpec;
use serde::{Deserialize, Serialize};

/// Color scheme the colors are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// RGBA color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, GradientError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(GradientError::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| GradientError::InvalidColor(hex.to_string()))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Convert to 8-bit channels, clamping out-of-range components.
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

/// A color with separate values for light and dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicColor {
    pub light: Color,
    pub dark: Color,
}

impl DynamicColor {
    pub fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Same color in both appearances.
    pub fn fixed(color: Color) -> Self {
        Self::new(color, color)
    }

    pub fn resolve(&self, appearance: Appearance) -> Color {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }
}

impl From<Color> for DynamicColor {
    fn from(color: Color) -> Self {
        Self::fixed(color)
    }
}

/// Anything that yields a concrete color for an appearance.
pub trait Resolve {
    fn resolve(&self, appearance: Appearance) -> Color;
}

impl Resolve for Color {
    fn resolve(&self, _appearance: Appearance) -> Color {
        *self
    }
}

impl Resolve for DynamicColor {
    fn resolve(&self, appearance: Appearance) -> Color {
        DynamicColor::resolve(self, appearance)
    }
}

/// Resolve the colors of a gradient for an appearance.
///
/// Returns `None` when the gradient has no colors. Only colors are touched; call
/// this alone when the appearance changes, without re-running the transform.
pub fn resolve_colors<C: Resolve>(
    spec: &GradientSpec<C>,
    appearance: Appearance,
) -> Option<Vec<Color>> {
    spec.colors
        .as_ref()
        .map(|colors| colors.iter().map(|c| c.resolve(appearance)).collect())
}
