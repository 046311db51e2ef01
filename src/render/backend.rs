//! Render backend trait for pluggable drawing surfaces.
//!
//! This module defines the `RenderBackend` trait that abstracts the surface a
//! wheel is drawn onto, allowing different backends (in-memory SVG markup,
//! browser DOM) to be used interchangeably.

use crate::error::Result;
use crate::types::Scene;

/// Trait for render backends
///
/// A backend is bound to one named surface and draws whole scenes onto it.
/// Drawing never patches: callers clear and then draw a complete scene.
pub trait RenderBackend {
    /// Bind to the surface named `surface_id`.
    ///
    /// Fails with [`crate::error::WheelError::SurfaceNotFound`] when no such
    /// surface exists; the backend then stays unbound.
    fn attach(&mut self, surface_id: &str) -> Result<()>;

    /// Remove everything previously drawn on the bound surface.
    fn clear(&mut self);

    /// Draw `scene` as the sole content of the bound surface.
    ///
    /// Implementations must not leave partial output behind on error.
    fn draw(&mut self, scene: &Scene) -> Result<()>;
}
