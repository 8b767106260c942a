//! Gradient WASM - WebAssembly bindings for gradient-core
//!
//! This crate exposes the gradient geometry to JavaScript/TypeScript hosts
//! such as canvas components and custom elements.
//!
//! # Module Structure
//!
//! - `gradient` - Stateful gradient holder (`JsGradient`)
//! - `transform` - Stateless transform and stop helpers
//! - `types` - JavaScript-compatible spec and color types
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsGradient } from '@gradient-view/wasm';
//!
//! await init();
//!
//! const gradient = new JsGradient();
//! gradient.set_colors([{ light: '#E87AA4' }, { light: '#FFB5D1', dark: '#3A1022' }]);
//! gradient.set_conic(0.6);
//! gradient.set_size(canvas.width, canvas.height);
//! const params = gradient.render_params();
//! ```

use wasm_bindgen::prelude::*;

mod gradient;
mod transform;
mod types;

// Re-export public types
pub use gradient::JsGradient;
pub use transform::{default_locations, stripe_locations, transform_gradient};
pub use types::{css_rgba, JsColor, JsGradientSpec};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
