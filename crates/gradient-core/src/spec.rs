//! User-facing gradient description.

use crate::color::DynamicColor;
use crate::Point;
use serde::{Deserialize, Serialize};

/// The type of gradient, with the parameters that only apply to that type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GradientKind {
    /// Linear gradient from `start_point` to `end_point`.
    #[default]
    Axial,
    /// Circular gradient centered at `start_point` with `end_point` on the
    /// circumference.
    ///
    /// `factor` controls flattening: 1 gives a regular circle, smaller values
    /// push the apparent origin away from `end_point` and compress the stop
    /// locations, giving a less curved gradient when `start_point` sits on the
    /// edge of the view.
    Radial { factor: f64 },
    /// Sweep around `start_point`, starting at `angle` radians. `end_point` is
    /// ignored.
    ///
    /// Locations are adjusted so the sweep looks evenly spaced on a
    /// rectangular viewport. Interpolation between stops is not, so use many
    /// stops for a smooth result on a non-square viewport.
    Conic { angle: f64 },
}

impl GradientKind {
    pub fn radial(factor: f64) -> Self {
        GradientKind::Radial { factor }
    }

    pub fn conic(angle: f64) -> Self {
        GradientKind::Conic { angle }
    }

    /// Whether the geometry of this kind depends on the viewport size.
    pub fn needs_viewport(&self) -> bool {
        !matches!(self, GradientKind::Axial)
    }
}

fn default_start_point() -> Point {
    Point::new(0.5, 0.0)
}

fn default_end_point() -> Point {
    Point::new(0.5, 1.0)
}

/// A gradient as the user describes it.
///
/// Defaults to a top-to-bottom axial gradient with no colors. Every field has
/// a serde default, so partial configurations deserialize:
///
/// ```text
/// { "colors": [...], "kind": { "type": "conic", "angle": 0.6 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "C: Deserialize<'de>"))]
pub struct GradientSpec<C = DynamicColor> {
    /// Stop colors from start to finish. Set at least two.
    #[serde(default)]
    pub colors: Option<Vec<C>>,
    /// Stop locations from 0 at the start to 1 at the end, one per color.
    /// When absent, colors are distributed uniformly.
    #[serde(default)]
    pub locations: Option<Vec<f64>>,
    /// Starting point in relative coordinates. See [`GradientKind`] for how
    /// each kind uses it.
    #[serde(default = "default_start_point")]
    pub start_point: Point,
    /// End point in relative coordinates. See [`GradientKind`] for how each
    /// kind uses it.
    #[serde(default = "default_end_point")]
    pub end_point: Point,
    #[serde(default)]
    pub kind: GradientKind,
}

impl<C> Default for GradientSpec<C> {
    fn default() -> Self {
        Self {
            colors: None,
            locations: None,
            start_point: default_start_point(),
            end_point: default_end_point(),
            kind: GradientKind::Axial,
        }
    }
}

impl<C> GradientSpec<C> {
    /// Create an axial top-to-bottom gradient with the given colors.
    pub fn new(colors: Vec<C>) -> Self {
        Self {
            colors: Some(colors),
            ..Self::default()
        }
    }

    pub fn with_locations(mut self, locations: Vec<f64>) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn with_points(mut self, start_point: Point, end_point: Point) -> Self {
        self.start_point = start_point;
        self.end_point = end_point;
        self
    }

    pub fn with_kind(mut self, kind: GradientKind) -> Self {
        self.kind = kind;
        self
    }

    /// Number of colors, or `None` when no colors are set.
    pub fn color_count(&self) -> Option<usize> {
        self.colors.as_ref().map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_default_spec() {
        let spec: GradientSpec = GradientSpec::default();
        assert!(spec.colors.is_none());
        assert!(spec.locations.is_none());
        assert_eq!(spec.start_point, Point::new(0.5, 0.0));
        assert_eq!(spec.end_point, Point::new(0.5, 1.0));
        assert_eq!(spec.kind, GradientKind::Axial);
    }

    #[test]
    fn test_builder() {
        let spec = GradientSpec::new(vec![Color::WHITE, Color::BLACK])
            .with_locations(vec![0.2, 0.8])
            .with_points(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .with_kind(GradientKind::radial(0.5));

        assert_eq!(spec.color_count(), Some(2));
        assert_eq!(spec.locations, Some(vec![0.2, 0.8]));
        assert_eq!(spec.end_point, Point::new(1.0, 1.0));
        assert_eq!(spec.kind, GradientKind::Radial { factor: 0.5 });
    }

    #[test]
    fn test_needs_viewport() {
        assert!(!GradientKind::Axial.needs_viewport());
        assert!(GradientKind::radial(1.0).needs_viewport());
        assert!(GradientKind::conic(0.0).needs_viewport());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{
            "colors": [{"r": 1.0, "g": 0.0, "b": 0.0}, {"r": 0.0, "g": 0.0, "b": 1.0}],
            "kind": {"type": "conic", "angle": 0.6}
        }"#;
        let spec: GradientSpec<Color> = serde_json::from_str(json).unwrap();

        assert_eq!(spec.color_count(), Some(2));
        assert!(spec.locations.is_none());
        assert_eq!(spec.start_point, Point::new(0.5, 0.0));
        assert_eq!(spec.end_point, Point::new(0.5, 1.0));
        assert_eq!(spec.kind, GradientKind::Conic { angle: 0.6 });
    }

    #[test]
    fn test_deserialize_empty_config() {
        let spec: GradientSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec, GradientSpec::default());
    }

    #[test]
    fn test_deserialize_dynamic_colors() {
        let json = r#"{
            "colors": [
                {"light": {"r": 1.0, "g": 1.0, "b": 1.0}, "dark": {"r": 0.0, "g": 0.0, "b": 0.0}},
                {"light": {"r": 0.5, "g": 0.5, "b": 0.5}, "dark": {"r": 0.5, "g": 0.5, "b": 0.5}}
            ],
            "kind": {"type": "radial", "factor": 0.75}
        }"#;
        let spec: GradientSpec = serde_json::from_str(json).unwrap();

        let colors = spec.colors.unwrap();
        assert_eq!(colors[0].dark, Color::BLACK);
        assert_eq!(spec.kind, GradientKind::Radial { factor: 0.75 });
    }

    #[test]
    fn test_kind_serialize_tagged() {
        let json = serde_json::to_string(&GradientKind::Axial).unwrap();
        assert_eq!(json, r#"{"type":"axial"}"#);
    }
}
