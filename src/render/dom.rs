//! Browser DOM backend (wasm32).
//!
//! Finds the container element by id and appends the wheel as a live
//! `<svg>` subtree. The subtree is built detached and appended in one step,
//! so a failure half-way leaves the container untouched.

use web_sys::{Document, Element};

use super::backend::RenderBackend;
use super::element::{SvgElement, SVG_NS};
use crate::error::{js_error, Result, WheelError};
use crate::types::Scene;

pub struct DomBackend {
    document: Option<Document>,
    container: Option<Element>,
}

impl DomBackend {
    /// Backend for the current window's document.
    pub fn new() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self {
            document,
            container: None,
        }
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document: Some(document),
            container: None,
        }
    }

    /// The bound container element.
    pub fn container(&self) -> Option<&Element> {
        self.container.as_ref()
    }

    fn build(document: &Document, element: &SvgElement) -> Result<Element> {
        let node = document
            .create_element_ns(Some(SVG_NS), element.name)
            .map_err(|e| js_error(&e))?;
        for (name, value) in &element.attrs {
            node.set_attribute(name, value).map_err(|e| js_error(&e))?;
        }
        if let Some(text) = &element.text {
            node.set_text_content(Some(text));
        }
        for child in &element.children {
            let child = Self::build(document, child)?;
            node.append_child(&child).map_err(|e| js_error(&e))?;
        }
        Ok(node)
    }
}

impl Default for DomBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for DomBackend {
    fn attach(&mut self, surface_id: &str) -> Result<()> {
        let container = self
            .document
            .as_ref()
            .and_then(|doc| doc.get_element_by_id(surface_id))
            .ok_or_else(|| WheelError::SurfaceNotFound(surface_id.to_string()))?;
        self.container = Some(container);
        Ok(())
    }

    fn clear(&mut self) {
        if let Some(container) = &self.container {
            container.set_inner_html("");
        }
    }

    fn draw(&mut self, scene: &Scene) -> Result<()> {
        let (Some(document), Some(container)) = (&self.document, &self.container) else {
            return Err(WheelError::Render("no surface attached".to_string()));
        };
        let svg = Self::build(document, &scene.to_element())?;
        container.append_child(&svg).map_err(|e| js_error(&e))?;
        Ok(())
    }
}
