//! SVG markup backend.
//!
//! Serializes scenes to standalone SVG documents with `quick-xml` and keeps
//! them on named in-memory surfaces. Used natively, by the CLI and by the
//! `renderWheelSvg` export.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::backend::RenderBackend;
use super::element::{SvgElement, SVG_NS};
use crate::error::{Result, WheelError};
use crate::types::Scene;

/// Serialize `scene` as a standalone SVG document.
pub fn write_svg(scene: &Scene) -> Result<String> {
    write_element_tree(&scene.to_element())
}

/// Serialize an element tree, declaring the SVG namespace on the root.
pub fn write_element_tree(root: &SvgElement) -> Result<String> {
    let mut writer = Writer::new(Vec::with_capacity(16 * 1024));
    write_element(&mut writer, root, true)?;
    String::from_utf8(writer.into_inner())
        .map_err(|e| WheelError::Render(format!("SVG output is not UTF-8: {e}")))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &SvgElement, root: bool) -> Result<()> {
    let mut start = BytesStart::new(element.name);
    if root {
        start.push_attribute(("xmlns", SVG_NS));
    }
    for (name, value) in &element.attrs {
        start.push_attribute((*name, value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| WheelError::Render(e.to_string()));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| WheelError::Render(e.to_string()))?;
    if let Some(text) = &element.text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| WheelError::Render(e.to_string()))?;
    }
    for child in &element.children {
        write_element(writer, child, false)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name)))
        .map_err(|e| WheelError::Render(e.to_string()))
}

/// Wrap SVG markup as a base64 `data:` URI (for `<img src>` or CSS).
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

/// In-memory surfaces holding SVG markup, addressed by id.
#[derive(Debug, Default)]
pub struct SvgBackend {
    surfaces: HashMap<String, String>,
    attached: Option<String>,
}

impl SvgBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend with empty surfaces for each id.
    pub fn with_surfaces<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut backend = Self::new();
        for id in ids {
            backend.add_surface(id);
        }
        backend
    }

    /// Register an empty surface. Existing content is kept.
    pub fn add_surface(&mut self, id: impl Into<String>) {
        self.surfaces.entry(id.into()).or_default();
    }

    /// Markup currently on surface `id`.
    pub fn surface(&self, id: &str) -> Option<&str> {
        self.surfaces.get(id).map(String::as_str)
    }

    pub fn has_surface(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    /// Id of the bound surface.
    pub fn attached(&self) -> Option<&str> {
        self.attached.as_deref()
    }

    /// Markup on the bound surface.
    pub fn markup(&self) -> Option<&str> {
        self.attached.as_deref().and_then(|id| self.surface(id))
    }
}

impl RenderBackend for SvgBackend {
    fn attach(&mut self, surface_id: &str) -> Result<()> {
        if !self.surfaces.contains_key(surface_id) {
            return Err(WheelError::SurfaceNotFound(surface_id.to_string()));
        }
        self.attached = Some(surface_id.to_string());
        Ok(())
    }

    fn clear(&mut self) {
        if let Some(content) = self
            .attached
            .as_ref()
            .and_then(|id| self.surfaces.get_mut(id))
        {
            content.clear();
        }
    }

    fn draw(&mut self, scene: &Scene) -> Result<()> {
        let id = self
            .attached
            .as_ref()
            .ok_or_else(|| WheelError::Render("no surface attached".to_string()))?;
        // Serialize fully before touching the surface.
        let markup = write_svg(scene)?;
        let content = self
            .surfaces
            .get_mut(id)
            .ok_or_else(|| WheelError::SurfaceNotFound(id.clone()))?;
        *content = markup;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_escapes_text_and_attributes() {
        let tree = SvgElement::new("svg").child(
            SvgElement::new("text")
                .attr("fill", "a\"b")
                .text("1 < 2 & 3"),
        );
        let markup = write_element_tree(&tree).unwrap();
        assert_eq!(
            markup,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><text fill="a&quot;b">1 &lt; 2 &amp; 3</text></svg>"#
        );
    }

    #[test]
    fn test_empty_elements_self_close() {
        let tree = SvgElement::new("defs").child(SvgElement::new("feMergeNode").attr("in", "x"));
        let markup = write_element_tree(&tree).unwrap();
        assert!(markup.contains(r#"<feMergeNode in="x"/>"#));
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(
            svg_data_uri("<svg/>"),
            "data:image/svg+xml;base64,PHN2Zy8+"
        );
    }

    #[test]
    fn test_attach_requires_surface() {
        let mut backend = SvgBackend::with_surfaces(["wheel"]);
        assert!(matches!(
            backend.attach("missing"),
            Err(WheelError::SurfaceNotFound(id)) if id == "missing"
        ));
        assert!(backend.attached().is_none());
        backend.attach("wheel").unwrap();
        assert_eq!(backend.attached(), Some("wheel"));
        assert_eq!(backend.markup(), Some(""));
    }
}
