//! Backend-neutral SVG element tree.
//!
//! A [`Scene`] is lowered once into an [`SvgElement`] tree; the markup writer
//! serializes the tree and the DOM backend materializes it node by node, so
//! both produce the same document.

use crate::types::{GlowFilter, Legend, Marker, Scene};

/// SVG namespace URI.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// CSS class of the root `<svg>` element.
pub const WHEEL_CLASS: &str = "lottery-wheel";

/// CSS class of the legend group.
pub const LEGEND_CLASS: &str = "legend";

/// One SVG element with attributes, optional text content and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgElement {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Depth-first count of elements named `name`, including `self`.
    pub fn count(&self, name: &str) -> usize {
        usize::from(self.name == name) + self.children.iter().map(|c| c.count(name)).sum::<usize>()
    }
}

impl Scene {
    /// Lower the scene into its root `<svg>` element.
    ///
    /// Children appear in drawing order: every marker (circle then label),
    /// then the filter definitions, then the legend.
    pub fn to_element(&self) -> SvgElement {
        let mut svg = SvgElement::new("svg")
            .attr("width", self.width)
            .attr("height", self.height)
            .attr("viewBox", format!("0 0 {} {}", self.width, self.height))
            .attr("class", WHEEL_CLASS);

        for marker in &self.markers {
            let (circle, label) = marker_elements(marker, &self.glow);
            svg.children.push(circle);
            svg.children.push(label);
        }
        svg.children.push(glow_defs(&self.glow));
        svg.children.push(legend_group(&self.legend));
        svg
    }
}

fn marker_elements(marker: &Marker, glow: &GlowFilter) -> (SvgElement, SvgElement) {
    let mut circle = SvgElement::new("circle")
        .attr("cx", marker.cx)
        .attr("cy", marker.cy)
        .attr("r", marker.radius)
        .attr("fill", &marker.fill)
        .attr("stroke", &marker.stroke)
        .attr("stroke-width", marker.stroke_width);
    if marker.highlighted {
        circle = circle.attr("filter", glow.reference());
    }

    let label = &marker.label;
    let text = SvgElement::new("text")
        .attr("x", label.x)
        .attr("y", label.y)
        .attr("text-anchor", "middle")
        .attr("dominant-baseline", "central")
        .attr("font-size", format!("{}px", label.font_size))
        .attr("font-weight", if label.bold { "bold" } else { "normal" })
        .attr("fill", &label.fill)
        .text(label.text.as_str());

    (circle, text)
}

fn glow_defs(glow: &GlowFilter) -> SvgElement {
    let merge = SvgElement::new("feMerge")
        .child(SvgElement::new("feMergeNode").attr("in", "coloredBlur"))
        .child(SvgElement::new("feMergeNode").attr("in", "SourceGraphic"));
    let filter = SvgElement::new("filter")
        .attr("id", &glow.id)
        .child(
            SvgElement::new("feGaussianBlur")
                .attr("stdDeviation", glow.std_deviation)
                .attr("result", "coloredBlur"),
        )
        .child(merge);
    SvgElement::new("defs").child(filter)
}

fn legend_group(legend: &Legend) -> SvgElement {
    let swatch = &legend.swatch;
    let caption = &legend.caption;
    SvgElement::new("g")
        .attr("class", LEGEND_CLASS)
        .attr("transform", format!("translate({}, {})", legend.x, legend.y))
        .child(
            SvgElement::new("circle")
                .attr("cx", swatch.cx)
                .attr("cy", swatch.cy)
                .attr("r", swatch.radius)
                .attr("fill", &swatch.fill)
                .attr("stroke", &swatch.stroke)
                .attr("stroke-width", swatch.stroke_width),
        )
        .child(
            SvgElement::new("text")
                .attr("x", caption.x)
                .attr("y", caption.y)
                .attr("font-size", format!("{}px", caption.font_size))
                .attr("fill", &caption.fill)
                .text(caption.text.as_str()),
        )
}
