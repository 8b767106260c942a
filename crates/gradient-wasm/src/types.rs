//! JavaScript-compatible gradient description.
//!
//! These types mirror the core [`GradientSpec`] but use hex strings for
//! colors, which is how the browser side stores them. They are passed to and
//! from JavaScript as plain objects via serde_wasm_bindgen.

use gradient_core::{Color, DynamicColor, GradientError, GradientKind, GradientSpec, Point};
use serde::{Deserialize, Serialize};

/// JavaScript-compatible color: a hex string for light appearance and an
/// optional one for dark appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsColor {
    pub light: String,
    #[serde(default)]
    pub dark: Option<String>,
}

impl TryFrom<&JsColor> for DynamicColor {
    type Error = GradientError;

    fn try_from(js: &JsColor) -> Result<Self, Self::Error> {
        let light = Color::from_hex(&js.light)?;
        let dark = match &js.dark {
            Some(hex) => Color::from_hex(hex)?,
            None => light,
        };
        Ok(DynamicColor::new(light, dark))
    }
}

/// JavaScript-compatible gradient spec.
///
/// Missing fields take the same defaults as the core spec.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsGradientSpec {
    #[serde(default)]
    pub colors: Option<Vec<JsColor>>,
    #[serde(default)]
    pub locations: Option<Vec<f64>>,
    #[serde(default)]
    pub start_point: Option<Point>,
    #[serde(default)]
    pub end_point: Option<Point>,
    #[serde(default)]
    pub kind: GradientKind,
}

impl TryFrom<JsGradientSpec> for GradientSpec {
    type Error = GradientError;

    fn try_from(js: JsGradientSpec) -> Result<Self, Self::Error> {
        let colors = match &js.colors {
            Some(colors) => Some(
                colors
                    .iter()
                    .map(DynamicColor::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };

        let defaults = GradientSpec::<DynamicColor>::default();
        Ok(GradientSpec {
            colors,
            locations: js.locations,
            start_point: js.start_point.unwrap_or(defaults.start_point),
            end_point: js.end_point.unwrap_or(defaults.end_point),
            kind: js.kind,
        })
    }
}

/// Format a resolved color as a CSS `rgba()` string.
pub fn css_rgba(color: Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format!("rgba({}, {}, {}, {})", r, g, b, color.a.clamp(0.0, 1.0))
}
