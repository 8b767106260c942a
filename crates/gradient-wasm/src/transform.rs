//! WASM bindings for the stateless gradient functions.
//!
//! This module exposes the gradient transform and the stop helpers to
//! JavaScript. Specs and results travel as plain objects.

use crate::types::JsGradientSpec;
use gradient_core::{GradientError, GradientSpec, ViewportSize};
use wasm_bindgen::prelude::*;

/// Compute rendering parameters for a gradient spec.
///
/// # Arguments
///
/// * `spec` - Gradient spec object (JsGradientSpec structure)
/// * `width` - Viewport width in pixels
/// * `height` - Viewport height in pixels
///
/// # Returns
///
/// An object with `kind`, `locations`, `start_point` and `end_point`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const params = transform_gradient({
///   colors: [{ light: '#F9D98C' }, { light: '#5D11F7', dark: '#1A0548' }],
///   start_point: { x: 0.5, y: 1 },
///   end_point: { x: 0, y: 0 },
///   kind: { type: 'radial', factor: 0.75 },
/// }, canvas.width, canvas.height);
/// ```
#[wasm_bindgen]
pub fn transform_gradient(spec: JsValue, width: f64, height: f64) -> Result<JsValue, JsValue> {
    let js: JsGradientSpec = serde_wasm_bindgen::from_value(spec)
        .map_err(|e| JsValue::from_str(&format!("Invalid gradient spec: {}", e)))?;

    let spec: GradientSpec = js
        .try_into()
        .map_err(|e: GradientError| JsValue::from_str(&e.to_string()))?;
    let params = gradient_core::transform(&spec, ViewportSize::new(width, height))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&params).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Evenly spaced stop locations for `count` colors.
#[wasm_bindgen]
pub fn default_locations(count: usize) -> Vec<f64> {
    gradient_core::default_locations(count)
}

/// Stop locations for `count` hard-edged two-color stripes.
///
/// Pair with colors `[a, a, b, b]` repeated `count` times.
#[wasm_bindgen]
pub fn stripe_locations(count: usize) -> Vec<f64> {
    let (_, locations) = gradient_core::stripes((), (), count);
    locations
}
