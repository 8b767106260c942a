//! Gradient state WASM bindings.
//!
//! This module provides a JavaScript class that holds a gradient's
//! configuration the way a custom element or canvas component would: set
//! properties as they change, then ask for render parameters on redraw and for
//! colors when the color scheme changes.

use crate::types::{css_rgba, JsColor};
use gradient_core::{
    Appearance, DynamicColor, GradientError, GradientKind, GradientState, Point, ViewportSize,
};
use wasm_bindgen::prelude::*;

fn to_js_error(e: GradientError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Gradient state wrapper for JavaScript
#[wasm_bindgen]
pub struct JsGradient {
    inner: GradientState,
}

#[wasm_bindgen]
impl JsGradient {
    /// Create a new top-to-bottom axial gradient with no colors
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: GradientState::default(),
        }
    }

    /// Set the colors from an array of `{ light, dark? }` hex objects.
    ///
    /// Passing `null` or `undefined` clears the colors.
    pub fn set_colors(&mut self, colors: JsValue) -> Result<(), JsValue> {
        if colors.is_null() || colors.is_undefined() {
            self.inner.set_colors(None);
            return Ok(());
        }

        let js: Vec<JsColor> = serde_wasm_bindgen::from_value(colors)
            .map_err(|e| JsValue::from_str(&format!("Invalid colors: {}", e)))?;
        let colors = js
            .iter()
            .map(DynamicColor::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_js_error)?;

        self.inner.set_colors(Some(colors));
        Ok(())
    }

    /// Set explicit stop locations, or clear them to distribute uniformly
    pub fn set_locations(&mut self, locations: Option<Vec<f64>>) {
        self.inner.set_locations(locations);
    }

    pub fn set_start_point(&mut self, x: f64, y: f64) {
        self.inner.set_start_point(Point::new(x, y));
    }

    pub fn set_end_point(&mut self, x: f64, y: f64) {
        self.inner.set_end_point(Point::new(x, y));
    }

    pub fn set_axial(&mut self) {
        self.inner.set_kind(GradientKind::Axial);
    }

    pub fn set_radial(&mut self, factor: f64) {
        self.inner.set_kind(GradientKind::radial(factor));
    }

    /// Set a conic gradient starting at `angle` radians
    pub fn set_conic(&mut self, angle: f64) {
        self.inner.set_kind(GradientKind::conic(angle));
    }

    /// Record the laid-out size in pixels
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.inner.set_viewport(ViewportSize::new(width, height));
    }

    /// Switch between light and dark color schemes
    pub fn set_dark_mode(&mut self, dark: bool) {
        let appearance = if dark {
            Appearance::Dark
        } else {
            Appearance::Light
        };
        self.inner.set_appearance(appearance);
    }

    /// Compute render parameters.
    ///
    /// Returns `null` while a radial or conic gradient is waiting for a size,
    /// and throws on an invalid configuration.
    pub fn render_params(&self) -> Result<JsValue, JsValue> {
        match self.inner.render_params().map_err(to_js_error)? {
            Some(params) => {
                serde_wasm_bindgen::to_value(&params).map_err(|e| JsValue::from_str(&e.to_string()))
            }
            None => Ok(JsValue::NULL),
        }
    }

    /// Resolved colors for the current color scheme as CSS `rgba()` strings.
    ///
    /// Returns an empty array when no colors are set.
    pub fn colors(&self) -> Vec<String> {
        self.inner
            .colors()
            .unwrap_or_default()
            .into_iter()
            .map(css_rgba)
            .collect()
    }
}

impl Default for JsGradient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradient_core::Color;

    #[test]
    fn test_new_gradient_has_no_colors() {
        let gradient = JsGradient::new();
        assert!(gradient.colors().is_empty());
    }

    #[test]
    fn test_kind_setters() {
        let mut gradient = JsGradient::new();

        gradient.set_radial(0.75);
        assert_eq!(gradient.inner.spec().kind, GradientKind::Radial { factor: 0.75 });

        gradient.set_conic(0.6);
        assert_eq!(gradient.inner.spec().kind, GradientKind::Conic { angle: 0.6 });

        gradient.set_axial();
        assert_eq!(gradient.inner.spec().kind, GradientKind::Axial);
    }

    #[test]
    fn test_point_and_size_setters() {
        let mut gradient = JsGradient::new();
        gradient.set_start_point(0.5, 0.7);
        gradient.set_end_point(0.1, 0.2);
        gradient.set_size(320.0, 200.0);

        assert_eq!(gradient.inner.spec().start_point, Point::new(0.5, 0.7));
        assert_eq!(gradient.inner.spec().end_point, Point::new(0.1, 0.2));
        assert_eq!(
            gradient.inner.viewport(),
            Some(ViewportSize::new(320.0, 200.0))
        );
    }

    #[test]
    fn test_dark_mode_switches_colors() {
        let mut gradient = JsGradient::new();
        gradient.inner.set_colors(Some(vec![
            DynamicColor::new(Color::WHITE, Color::BLACK),
            DynamicColor::fixed(Color::rgb(1.0, 0.0, 0.0)),
        ]));

        assert_eq!(
            gradient.colors(),
            vec!["rgba(255, 255, 255, 1)", "rgba(255, 0, 0, 1)"]
        );

        gradient.set_dark_mode(true);
        assert_eq!(
            gradient.colors(),
            vec!["rgba(0, 0, 0, 1)", "rgba(255, 0, 0, 1)"]
        );
    }

    #[test]
    fn test_locations_setter() {
        let mut gradient = JsGradient::new();
        gradient.set_locations(Some(vec![0.1, 0.9]));
        assert_eq!(gradient.inner.spec().locations, Some(vec![0.1, 0.9]));

        gradient.set_locations(None);
        assert!(gradient.inner.spec().locations.is_none());
    }

    // Note: render_params and set_colors return JsValue and are tested on the
    // wasm target below.
}
