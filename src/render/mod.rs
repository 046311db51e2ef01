//! Rendering engine with pluggable backends.
//!
//! This module provides:
//! - Backend-agnostic rendering trait
//! - A backend-neutral SVG element tree lowered from scenes
//! - SVG markup backend (native and wasm)
//! - Browser DOM backend (wasm32)
//! - Color utilities

pub mod backend;
pub mod colors;
pub mod element;
pub mod svg;

#[cfg(target_arch = "wasm32")]
pub mod dom;

// Re-export commonly used types
pub use backend::RenderBackend;
pub use colors::{palette, random_chart_colors, Rgb};
pub use element::{SvgElement, SVG_NS};
pub use svg::{svg_data_uri, write_svg, SvgBackend};

#[cfg(target_arch = "wasm32")]
pub use dom::DomBackend;
