//! Gradient geometry transforms.
//!
//! The rendering primitive only interpolates between two points, along an
//! axis, an ellipse or a cone. This module converts a [`GradientSpec`] into the
//! points and locations that make the primitive draw what the gradient describes.
//!
//! # Pipeline
//!
//! 1. Validate the gradient against the viewport
//! 2. Default the stop locations if none were given
//! 3. Apply the kind-specific transform
//!
//! # Coordinate System
//!
//! - Points are relative to the viewport: (0, 0) top-left, (1, 1) bottom-right
//! - Viewport sizes are in pixels
//! - Angles are in radians

pub mod axial;
pub mod conic;
pub mod radial;

pub use axial::transform_axial;
pub use conic::transform_conic;
pub use radial::transform_radial;

use crate::error::GradientError;
use crate::spec::{GradientKind, GradientSpec};
use crate::stops::default_locations;
use crate::{Point, ViewportSize};
use serde::{Deserialize, Serialize};

/// Interpolation type selector understood by the rendering primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    Axial,
    Radial,
    Conic,
}

/// Parameters consumed by the rendering primitive.
///
/// The two points mean different things per kind: axis ends for axial, center
/// and radius-defining point for radial, center and orientation anchor for
/// conic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    pub kind: RenderKind,
    /// Stop locations, one per color. `None` when the gradient has no colors and
    /// no explicit locations.
    pub locations: Option<Vec<f64>>,
    pub start_point: Point,
    pub end_point: Point,
}

/// Transform a gradient spec into rendering parameters for a viewport.
///
/// This is a pure function: the same inputs always produce the same output,
/// and nothing is retained between calls. Call it again whenever the gradient or
/// the viewport size changes.
///
/// # Errors
///
/// Fails without computing anything when the gradient cannot be rendered:
/// - fewer than two colors
/// - explicit locations that do not match the color count
/// - a radial factor that is not positive and finite
/// - a conic angle that is not finite
/// - a zero, negative or non-finite viewport for radial and conic kinds
///
/// # Example
/// ```
/// use gradient_core::{transform, Color, GradientKind, GradientSpec, RenderKind, ViewportSize};
///
/// let spec = GradientSpec::new(vec![Color::WHITE, Color::BLACK])
///     .with_kind(GradientKind::conic(0.0));
/// let params = transform(&spec, ViewportSize::new(100.0, 100.0)).unwrap();
///
/// assert_eq!(params.kind, RenderKind::Conic);
/// assert_eq!(params.locations.map(|l| l.len()), Some(2));
/// ```
pub fn transform<C>(
    spec: &GradientSpec<C>,
    viewport: ViewportSize,
) -> Result<RenderParams, GradientError> {
    validate(spec, viewport)?;

    let locations = match (&spec.locations, spec.color_count()) {
        (Some(locations), _) => Some(locations.clone()),
        (None, Some(count)) => Some(default_locations(count)),
        (None, None) => None,
    };

    let params = match spec.kind {
        GradientKind::Axial => transform_axial(spec.start_point, spec.end_point, locations),
        GradientKind::Radial { factor } => {
            transform_radial(spec.start_point, spec.end_point, locations, factor, viewport)
        }
        GradientKind::Conic { angle } => {
            transform_conic(spec.start_point, angle, locations, viewport)
        }
    };

    Ok(params)
}

/// Check that a spec can be transformed for the given viewport.
///
/// Stop locations are not checked for order or range; they pass through the
/// per-kind formulas as given.
pub fn validate<C>(spec: &GradientSpec<C>, viewport: ViewportSize) -> Result<(), GradientError> {
    check_config(spec)
        .and_then(|()| check_viewport(spec.kind, viewport))
        .inspect_err(|e| log::debug!("rejected gradient spec: {e}"))
}

/// Check everything about a spec that does not depend on the viewport.
///
/// Hosts that wait for layout run this first so configuration errors are not
/// hidden while no size is known.
pub fn validate_config<C>(spec: &GradientSpec<C>) -> Result<(), GradientError> {
    check_config(spec).inspect_err(|e| log::debug!("rejected gradient spec: {e}"))
}

fn check_config<C>(spec: &GradientSpec<C>) -> Result<(), GradientError> {
    if let Some(count) = spec.color_count() {
        if count < 2 {
            return Err(GradientError::InsufficientStops { count });
        }
        if let Some(locations) = &spec.locations {
            if locations.len() != count {
                return Err(GradientError::MismatchedStopCount {
                    colors: count,
                    locations: locations.len(),
                });
            }
        }
    }

    match spec.kind {
        GradientKind::Radial { factor } if !(factor.is_finite() && factor > 0.0) => {
            Err(GradientError::InvalidFactor(factor))
        }
        GradientKind::Conic { angle } if !angle.is_finite() => {
            Err(GradientError::InvalidAngle(angle))
        }
        _ => Ok(()),
    }
}

fn check_viewport(kind: GradientKind, viewport: ViewportSize) -> Result<(), GradientError> {
    if kind.needs_viewport() && !viewport.is_usable() {
        return Err(GradientError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
