//! Data types shared by layout, rendering and the page bindings.

mod config;
mod profile;
mod scene;
mod strategy;

pub use config::*;
pub use profile::*;
pub use scene::*;
pub use strategy::*;

/// A CSS color string (e.g., "#dc3545", "white")
pub type CssColor = String;
