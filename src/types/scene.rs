//! Declarative description of a drawn wheel.
//!
//! A [`Scene`] is produced by pure layout code and consumed by a render
//! backend. It holds no drawing-surface handles.

use serde::Serialize;

use super::CssColor;

/// A complete wheel drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// One marker per number in range, ascending.
    pub markers: Vec<Marker>,
    pub glow: GlowFilter,
    pub legend: Legend,
}

impl Scene {
    pub fn marker(&self, number: u32) -> Option<&Marker> {
        self.markers.iter().find(|m| m.number == number)
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.highlighted)
    }
}

/// A circle with its centered number label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub number: u32,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: CssColor,
    pub stroke: CssColor,
    pub stroke_width: f64,
    pub highlighted: bool,
    pub label: Label,
}

/// Text centered on a marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub bold: bool,
    pub fill: CssColor,
}

/// Blur-and-merge filter applied to highlighted markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlowFilter {
    pub id: String,
    pub std_deviation: f64,
}

impl GlowFilter {
    /// `url(#id)` reference for a `filter` attribute.
    pub fn reference(&self) -> String {
        format!("url(#{})", self.id)
    }
}

impl Default for GlowFilter {
    fn default() -> Self {
        Self {
            id: "glow".to_string(),
            std_deviation: 2.5,
        }
    }
}

/// Strategy swatch plus its caption, positioned by a translated group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    /// Group translation (x)
    pub x: f64,
    /// Group translation (y)
    pub y: f64,
    pub swatch: Swatch,
    pub caption: Caption,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swatch {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: CssColor,
    pub stroke: CssColor,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub fill: CssColor,
    pub text: String,
}
