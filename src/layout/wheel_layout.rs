//! Grid geometry for a lottery wheel.
//!
//! Numbers fill the grid row by row starting at the top-left cell. Cell size
//! is the drawable area (size minus both margins) divided by the fixed
//! row/column count of the lottery.

use crate::types::GridShape;

/// Marker radius as a fraction of the smaller cell dimension.
pub const RADIUS_RATIO: f64 = 0.4;

/// Label font size as a multiple of the marker radius.
pub const FONT_RATIO: f64 = 1.2;

/// Pre-computed cell geometry for one wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub grid: GridShape,
    pub margin: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    /// Radius of every marker
    pub radius: f64,
}

impl WheelLayout {
    /// Compute the layout for a `width` × `height` surface.
    ///
    /// Margins larger than half the surface leave no drawable area; every
    /// marker then collapses onto the margin corner with a zero radius.
    pub fn new(grid: GridShape, width: f64, height: f64, margin: f64) -> Self {
        let available_width = (width - 2.0 * margin).max(0.0);
        let available_height = (height - 2.0 * margin).max(0.0);
        let cell_width = available_width / f64::from(grid.cols.max(1));
        let cell_height = available_height / f64::from(grid.rows.max(1));

        Self {
            grid,
            margin,
            cell_width,
            cell_height,
            radius: cell_width.min(cell_height) * RADIUS_RATIO,
        }
    }

    /// Row and column of the cell at `index` (0-based, row-major).
    pub const fn cell(&self, index: u32) -> (u32, u32) {
        let cols = if self.grid.cols == 0 { 1 } else { self.grid.cols };
        (index / cols, index % cols)
    }

    /// Pixel center of the cell at `index`.
    pub fn center(&self, index: u32) -> (f64, f64) {
        let (row, col) = self.cell(index);
        let cx = self.margin + f64::from(col) * self.cell_width + self.cell_width / 2.0;
        let cy = self.margin + f64::from(row) * self.cell_height + self.cell_height / 2.0;
        (cx, cy)
    }

    pub fn font_size(&self) -> f64 {
        self.radius * FONT_RATIO
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_megasena_geometry() {
        let layout = WheelLayout::new(GridShape::new(6, 10), 320.0, 320.0, 40.0);
        assert_eq!(layout.cell_width, 24.0);
        assert_eq!(layout.cell_height, 40.0);
        assert!(approx(layout.radius, 9.6));
        assert_eq!(layout.center(0), (52.0, 60.0));
        assert_eq!(layout.cell(59), (5, 9));
        assert_eq!(layout.center(59), (268.0, 260.0));
    }

    #[test]
    fn test_square_grid() {
        let layout = WheelLayout::new(GridShape::new(5, 5), 320.0, 320.0, 40.0);
        assert_eq!(layout.cell_width, 48.0);
        assert!(approx(layout.radius, 19.2));
        assert!(approx(layout.font_size(), 23.04));
        assert_eq!(layout.center(24), (256.0, 256.0));
    }

    #[test]
    fn test_oversized_margin_collapses() {
        let layout = WheelLayout::new(GridShape::new(5, 5), 60.0, 60.0, 40.0);
        assert_eq!(layout.radius, 0.0);
        assert_eq!(layout.center(12), (40.0, 40.0));
    }
}
