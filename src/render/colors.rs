//! Color utilities for wheel and chart rendering.
//!
//! Colors are CSS strings, usable directly in SVG attributes and DOM styles.

use crate::error::{Result, WheelError};
use crate::types::CssColor;

/// Upper bound (exclusive) for random chart color components, keeping them
/// dark enough to read on a white page.
pub const CHART_COMPONENT_LIMIT: u8 = 200;

/// Alpha applied to random chart colors.
pub const CHART_ALPHA: f64 = 0.7;

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a CSS `rgba()` string.
    pub fn to_rgba(self, alpha: f64) -> CssColor {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Scale a random byte onto `0..limit` without modulo bias toward low values.
fn scale_component(byte: u8, limit: u8) -> u8 {
    let scaled = u16::from(byte) * u16::from(limit) / 256;
    u8::try_from(scaled).unwrap_or(limit.saturating_sub(1))
}

/// `count` random translucent colors for chart series.
pub fn random_chart_colors(count: usize) -> Result<Vec<CssColor>> {
    let mut bytes = vec![0u8; count.saturating_mul(3)];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| WheelError::Other(format!("random source unavailable: {e}")))?;
    Ok(bytes
        .chunks_exact(3)
        .map(|rgb| match rgb {
            [r, g, b] => Rgb::new(
                scale_component(*r, CHART_COMPONENT_LIMIT),
                scale_component(*g, CHART_COMPONENT_LIMIT),
                scale_component(*b, CHART_COMPONENT_LIMIT),
            )
            .to_rgba(CHART_ALPHA),
            _ => Rgb::default().to_rgba(CHART_ALPHA),
        })
        .collect())
}

/// Colors used for wheel rendering (CSS format)
pub mod palette {
    pub const WHITE: &str = "white";

    /// Fill of markers outside the selection
    pub const NEUTRAL_FILL: &str = "#f8f9fa";

    /// Stroke of markers outside the selection
    pub const NEUTRAL_STROKE: &str = "#dee2e6";

    /// Body text (unselected labels, legend caption)
    pub const TEXT: &str = "#212529";

    /// Label color on selected markers
    pub const HIGHLIGHT_TEXT: &str = WHITE;
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_format() {
        assert_eq!(Rgb::new(10, 20, 30).to_rgba(0.7), "rgba(10, 20, 30, 0.7)");
    }

    #[test]
    fn test_scale_component_bounds() {
        assert_eq!(scale_component(0, 200), 0);
        assert_eq!(scale_component(255, 200), 199);
        assert_eq!(scale_component(128, 200), 100);
    }

    #[test]
    fn test_random_chart_colors() {
        let colors = random_chart_colors(12).unwrap();
        assert_eq!(colors.len(), 12);
        for color in &colors {
            let inner = color
                .strip_prefix("rgba(")
                .and_then(|c| c.strip_suffix(", 0.7)"))
                .unwrap();
            for part in inner.split(", ") {
                let value: u8 = part.parse().unwrap();
                assert!(value < CHART_COMPONENT_LIMIT);
            }
        }
        assert!(random_chart_colors(0).unwrap().is_empty());
    }
}
