//! Layout engine for computing marker positions.
//!
//! This module handles:
//! - Cell sizing from surface dimensions, margin and the lottery's grid
//! - Mapping a number's index to its row, column and pixel center

mod wheel_layout;

pub use wheel_layout::{WheelLayout, FONT_RATIO, RADIUS_RATIO};
