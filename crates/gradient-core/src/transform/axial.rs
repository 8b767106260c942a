//! Axial (linear) gradient transform.
//!
//! The primitive draws linear gradients natively, so points and locations pass
//! through unchanged and no viewport information is needed.

use super::{RenderKind, RenderParams};
use crate::Point;

/// Build render parameters for a linear gradient from `start` to `end`.
pub fn transform_axial(start: Point, end: Point, locations: Option<Vec<f64>>) -> RenderParams {
    RenderParams {
        kind: RenderKind::Axial,
        locations,
        start_point: start,
        end_point: end,
    }
}
