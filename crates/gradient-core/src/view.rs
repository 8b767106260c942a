//! Host-side gradient state.
//!
//! A host (a view, a canvas element, a widget) owns a [`GradientState`],
//! mutates it as its properties change, and asks for fresh render parameters
//! or colors whenever it redraws. Geometry and colors are independent: layout
//! and property changes call [`GradientState::render_params`], appearance
//! changes only need [`GradientState::colors`].

use crate::color::{resolve_colors, Appearance, Color, DynamicColor, Resolve};
use crate::error::GradientError;
use crate::spec::{GradientKind, GradientSpec};
use crate::transform::{transform, validate_config, RenderParams};
use crate::{Point, ViewportSize};

/// Mutable gradient configuration plus the context it is drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientState<C = DynamicColor> {
    spec: GradientSpec<C>,
    viewport: Option<ViewportSize>,
    appearance: Appearance,
}

impl<C> Default for GradientState<C> {
    fn default() -> Self {
        Self::new(GradientSpec::default())
    }
}

impl<C> GradientState<C> {
    /// Create a state with no viewport yet and light appearance.
    pub fn new(spec: GradientSpec<C>) -> Self {
        Self {
            spec,
            viewport: None,
            appearance: Appearance::default(),
        }
    }

    pub fn spec(&self) -> &GradientSpec<C> {
        &self.spec
    }

    pub fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn set_colors(&mut self, colors: Option<Vec<C>>) {
        self.spec.colors = colors;
    }

    pub fn set_locations(&mut self, locations: Option<Vec<f64>>) {
        self.spec.locations = locations;
    }

    pub fn set_start_point(&mut self, point: Point) {
        self.spec.start_point = point;
    }

    pub fn set_end_point(&mut self, point: Point) {
        self.spec.end_point = point;
    }

    pub fn set_kind(&mut self, kind: GradientKind) {
        self.spec.kind = kind;
    }

    /// Record the laid-out size of the host.
    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = Some(viewport);
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    /// Compute render parameters from the current state.
    ///
    /// Returns `Ok(None)` while a radial or conic gradient is waiting for
    /// layout to provide a usable size. Axial gradients never wait. Errors that
    /// do not depend on the size are reported even while waiting.
    pub fn render_params(&self) -> Result<Option<RenderParams>, GradientError> {
        validate_config(&self.spec)?;

        let viewport = match self.viewport {
            Some(viewport) if viewport.is_usable() => viewport,
            _ if self.spec.kind.needs_viewport() => {
                log::debug!("deferring {:?} gradient until layout", self.spec.kind);
                return Ok(None);
            }
            other => other.unwrap_or_default(),
        };

        transform(&self.spec, viewport).map(Some)
    }
}

impl<C: Resolve> GradientState<C> {
    /// Resolve the colors for the current appearance.
    pub fn colors(&self) -> Option<Vec<Color>> {
        resolve_colors(&self.spec, self.appearance)
    }
}

impl<C> From<GradientSpec<C>> for GradientState<C> {
    fn from(spec: GradientSpec<C>) -> Self {
        Self::new(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::RenderKind;

    fn sunrise() -> GradientState {
        GradientState::new(
            GradientSpec::new(vec![
                DynamicColor::new(Color::from_rgba8(249, 217, 140, 255), Color::BLACK),
                DynamicColor::new(Color::from_rgba8(244, 168, 139, 255), Color::BLACK),
                DynamicColor::fixed(Color::from_rgba8(93, 17, 247, 255)),
            ])
            .with_locations(vec![0.05, 0.15, 1.0])
            .with_points(Point::new(0.5, 1.0), Point::new(0.0, 0.0))
            .with_kind(GradientKind::radial(1.0)),
        )
    }

    #[test]
    fn test_radial_defers_until_layout() {
        let mut state = sunrise();
        assert_eq!(state.render_params(), Ok(None));

        state.set_viewport(ViewportSize::new(0.0, 0.0));
        assert_eq!(state.render_params(), Ok(None));

        state.set_viewport(ViewportSize::new(100.0, 100.0));
        let params = state.render_params().unwrap().unwrap();
        assert_eq!(params.kind, RenderKind::Radial);
        assert_eq!(params.start_point, Point::new(0.5, 1.0));
    }

    #[test]
    fn test_bad_factor_reported_before_layout() {
        let mut state = sunrise();
        state.set_kind(GradientKind::radial(0.0));
        assert_eq!(state.render_params(), Err(GradientError::InvalidFactor(0.0)));

        state.set_viewport(ViewportSize::new(0.0, 0.0));
        assert_eq!(state.render_params(), Err(GradientError::InvalidFactor(0.0)));
    }

    #[test]
    fn test_stop_errors_reported_before_layout() {
        let mut state = sunrise();
        state.set_locations(Some(vec![0.0, 1.0]));
        assert_eq!(
            state.render_params(),
            Err(GradientError::MismatchedStopCount {
                colors: 3,
                locations: 2
            })
        );

        state.set_locations(None);
        state.set_colors(Some(vec![DynamicColor::fixed(Color::WHITE)]));
        state.set_kind(GradientKind::conic(0.0));
        assert_eq!(
            state.render_params(),
            Err(GradientError::InsufficientStops { count: 1 })
        );
    }

    #[test]
    fn test_axial_renders_without_layout() {
        let state: GradientState<Color> =
            GradientSpec::new(vec![Color::WHITE, Color::BLACK]).into();
        let params = state.render_params().unwrap().unwrap();
        assert_eq!(params.kind, RenderKind::Axial);
        assert_eq!(params.locations, Some(vec![0.0, 1.0]));
    }

    #[test]
    fn test_errors_surface_after_layout() {
        let mut state = sunrise();
        state.set_viewport(ViewportSize::new(100.0, 100.0));
        state.set_locations(Some(vec![0.0, 1.0]));

        assert_eq!(
            state.render_params(),
            Err(GradientError::MismatchedStopCount {
                colors: 3,
                locations: 2
            })
        );
    }

    #[test]
    fn test_setters_recompute() {
        let mut state = sunrise();
        state.set_viewport(ViewportSize::new(100.0, 100.0));
        let before = state.render_params().unwrap().unwrap();

        state.set_kind(GradientKind::conic(0.6));
        state.set_start_point(Point::new(0.5, 0.7));
        let after = state.render_params().unwrap().unwrap();

        assert_ne!(before, after);
        assert_eq!(after.kind, RenderKind::Conic);
        assert_eq!(after.start_point, Point::new(0.5, 0.7));

        state.set_end_point(Point::new(0.1, 0.1));
        // Conic ignores the end point
        assert_eq!(state.render_params().unwrap().unwrap(), after);
    }

    #[test]
    fn test_appearance_changes_colors_only() {
        let mut state = sunrise();
        state.set_viewport(ViewportSize::new(240.0, 120.0));

        let light_params = state.render_params().unwrap();
        let light_colors = state.colors().unwrap();

        state.set_appearance(Appearance::Dark);
        let dark_params = state.render_params().unwrap();
        let dark_colors = state.colors().unwrap();

        assert_eq!(light_params, dark_params);
        assert_ne!(light_colors, dark_colors);
        assert_eq!(dark_colors[0], Color::BLACK);
        assert_eq!(dark_colors[2], light_colors[2]);
    }

    #[test]
    fn test_clearing_colors_clears_derived_locations() {
        let mut state = sunrise();
        state.set_locations(None);
        state.set_colors(None);
        state.set_kind(GradientKind::Axial);

        let params = state.render_params().unwrap().unwrap();
        assert!(params.locations.is_none());
        assert!(state.colors().is_none());
    }

    #[test]
    fn test_default_state() {
        let state: GradientState = GradientState::default();
        assert_eq!(state.appearance(), Appearance::Light);
        assert!(state.viewport().is_none());
        assert_eq!(state.spec(), &GradientSpec::default());
    }
}
