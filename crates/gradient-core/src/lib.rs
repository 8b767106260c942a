//! Gradient Core - gradient geometry library
//!
//! This crate turns an intuitive gradient description (color stops, a start
//! point, an end point and a gradient kind) into the parameters a simple
//! two-point rendering primitive needs to draw it, including the aspect-ratio
//! corrections that make radial and conic gradients look right on a
//! rectangular viewport.

pub mod color;
pub mod error;
pub mod spec;
pub mod stops;
pub mod transform;
pub mod view;

pub use color::{resolve_colors, Appearance, Color, DynamicColor, Resolve};
pub use error::GradientError;
pub use spec::{GradientKind, GradientSpec};
pub use stops::{default_locations, stripes};
pub use transform::{transform, RenderKind, RenderParams};
pub use view::GradientState;

/// A point in relative viewport coordinates.
///
/// (0, 0) is the top-left corner and (1, 1) the bottom-right corner. Values
/// outside that range are valid and are used as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal position (0.0 = left edge, 1.0 = right edge)
    pub x: f64,
    /// Vertical position (0.0 = top edge, 1.0 = bottom edge)
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the viewport the gradient is drawn into, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are finite and strictly positive.
    ///
    /// Radial and conic geometry divides by both dimensions, so anything else
    /// produces non-finite output.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Check if the viewport is square (width equals height).
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}
