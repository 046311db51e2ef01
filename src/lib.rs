//! wheelview - lottery wheel visualization for the web
//!
//! Draws a lottery's numbers as a grid of circles in the browser via
//! WebAssembly and SVG:
//! - Builtin profiles for Mega-Sena, Quina, Lotofácil, +Milionária, Timemania
//! - Selected numbers colored by the strategy that picked them
//! - Glow filter and strategy legend
//! - Page helpers: currency and date formatting, alerts, clipboard, forms
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { initPage, initWheelVisualization } from 'wheelview';
//! await init();
//! initPage();
//! const wheel = initWheelVisualization('wheel', 'lotofacil', [1, 2, 3], 'hot_numbers');
//! wheel.updateHighlightedNumbers([4, 5, 6]);
//! ```

#[macro_use]
pub mod console;

pub mod error;
pub mod layout;
pub mod page;
pub mod render;
pub mod types;
pub mod wheel;

use wasm_bindgen::prelude::*;

pub use error::{Result, WheelError};
pub use render::{RenderBackend, SvgBackend};
pub use types::*;
pub use wheel::{init_wheel_visualization, WheelRenderer};

#[cfg(target_arch = "wasm32")]
pub use wheel::LotteryWheel;

/// Render a standalone SVG document for a JSON wheel config.
///
/// Absent fields take their defaults; the builtin profiles are used.
///
/// # Errors
/// Returns an error if the JSON is malformed or the lottery type is unknown.
pub fn render_svg(options_json: &str) -> Result<String> {
    let config = WheelConfig::from_json(options_json)?;
    let scene = wheel::scene_for(&ProfileTable::builtin(), &config)?;
    render::write_svg(&scene)
}

/// Render a wheel config (JSON) to SVG markup without touching the page.
///
/// # Errors
/// Returns an error if the JSON is malformed or the lottery type is unknown.
#[wasm_bindgen(js_name = renderWheelSvg)]
pub fn render_wheel_svg(options_json: &str) -> std::result::Result<String, JsValue> {
    render_svg(options_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
