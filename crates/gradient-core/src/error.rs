//! Error types for gradient configuration.

use thiserror::Error;

/// Configuration errors detected before any gradient geometry is computed.
///
/// All variants are deterministic input-validation failures; retrying with the
/// same input yields the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientError {
    /// Fewer than two colors were supplied.
    #[error("A gradient needs at least two colors, got {count}")]
    InsufficientStops { count: usize },

    /// Explicit locations do not pair one-to-one with the colors.
    #[error("Got {locations} locations for {colors} colors")]
    MismatchedStopCount { colors: usize, locations: usize },

    /// Radial flattening factor is zero, negative or not finite.
    #[error("Radial factor must be positive and finite, got {0}")]
    InvalidFactor(f64),

    /// Conic starting angle is not finite.
    #[error("Conic angle must be finite, got {0}")]
    InvalidAngle(f64),

    /// Viewport has a zero, negative or non-finite dimension.
    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    /// A color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
