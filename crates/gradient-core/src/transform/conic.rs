//! Conic (sweep) gradient transform with aspect correction.
//!
//! The primitive sweeps around the start point in relative coordinates, which
//! are stretched by the viewport's aspect ratio. A stop that should sit at a
//! given angle in pixel space therefore appears at a different angle in
//! relative space. Each location is converted to its pixel-space angle,
//! projected onto the stretched ellipse, and expressed as a fraction of a full
//! turn measured from the projected start angle:
//!
//! ```text
//! a = angle + L * 2π
//! b = atan2(sin(a) / h, cos(a) / w) - atan2(sin(angle) / h, cos(angle) / w)
//! L' = fract(b / 2π)
//! ```
//!
//! On a square viewport the projection preserves angles and `L' == L`.

use super::{RenderKind, RenderParams};
use crate::{Point, ViewportSize};
use std::f64::consts::TAU;

/// Angle of the direction `angle` after scaling x by `1 / width` and y by
/// `1 / height`.
#[inline]
fn projected_angle(angle: f64, viewport: ViewportSize) -> f64 {
    (angle.sin() / viewport.height).atan2(angle.cos() / viewport.width)
}

/// Remap one stop location for a sweep starting at `angle`.
///
/// The result is wrapped into `[0, 1)`. A location of 0 always maps to exactly
/// 0.
#[inline]
pub fn remap_location(location: f64, angle: f64, viewport: ViewportSize) -> f64 {
    let a = angle + location * TAU;
    let b = projected_angle(a, viewport) - projected_angle(angle, viewport);
    let turns = b / TAU;
    let wrapped = turns - turns.floor();
    // A tiny negative `turns` rounds up to exactly 1.0 after wrapping
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Build render parameters for a sweep around `start` beginning at `angle`
/// radians.
///
/// The end point is not a real end point: it is an anchor one pixel from
/// `start` in the direction of `angle`, which fixes the orientation of the
/// sweep for the primitive.
pub fn transform_conic(
    start: Point,
    angle: f64,
    locations: Option<Vec<f64>>,
    viewport: ViewportSize,
) -> RenderParams {
    let anchor = Point::new(
        start.x + angle.cos() / viewport.width,
        start.y + angle.sin() / viewport.height,
    );

    RenderParams {
        kind: RenderKind::Conic,
        locations: locations.map(|locations| {
            locations
                .into_iter()
                .map(|l| remap_location(l, angle, viewport))
                .collect()
        }),
        start_point: start,
        end_point: anchor,
    }
}
