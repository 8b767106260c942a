//! Radial gradient transform with flattening.
//!
//! The primitive draws an ellipse centered at the start point whose radii are
//! given by the offset to the end point. The requested gradient is a circle
//! (in pixels) centered at `start` passing through `end`, so the pixel
//! distance between the two points becomes the radius on both axes.
//!
//! # Flattening
//!
//! With a factor below 1 the center is pushed away from `end`, along the line
//! through both points, by `1 / factor`, and the radius grows by the same
//! amount. Stop locations are then compressed toward 1 so the colors still
//! land where they would have on the unflattened circle near `end`:
//!
//! ```text
//! center' = end + (start - end) / factor
//! radius' = radius / factor
//! L'      = L * factor + (1 - factor)
//! ```

use super::{RenderKind, RenderParams};
use crate::{Point, ViewportSize};

/// Remap one stop location for a flattening factor.
///
/// The identity at `factor == 1`.
#[inline]
pub fn remap_location(location: f64, factor: f64) -> f64 {
    location * factor + (1.0 - factor)
}

/// Build render parameters for a radial gradient centered at `start` with
/// `end` on its circumference.
///
/// `factor` must be positive and `viewport` must have positive dimensions;
/// [`transform`](super::transform) checks both before calling this.
pub fn transform_radial(
    start: Point,
    end: Point,
    locations: Option<Vec<f64>>,
    factor: f64,
    viewport: ViewportSize,
) -> RenderParams {
    let ViewportSize { width, height } = viewport;

    // Radius in pixels
    let dx = (end.x - start.x) * width;
    let dy = (end.y - start.y) * height;
    let radius = (dx * dx + dy * dy).sqrt();

    // end + (start - end) / factor, written relative to start so that a
    // factor of 1 leaves the start point bit-identical.
    let push = 1.0 / factor - 1.0;
    let center = Point::new(
        start.x + (start.x - end.x) * push,
        start.y + (start.y - end.y) * push,
    );

    // Same pixel radius on both axes, converted back to relative units
    let rim = Point::new(
        center.x + radius / width / factor,
        center.y + radius / height / factor,
    );

    RenderParams {
        kind: RenderKind::Radial,
        locations: locations.map(|locations| {
            locations
                .into_iter()
                .map(|l| remap_location(l, factor))
                .collect()
        }),
        start_point: center,
        end_point: rim,
    }
}
