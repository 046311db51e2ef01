//! Scene construction: the pure half of drawing a wheel.

use crate::error::{Result, WheelError};
use crate::layout::WheelLayout;
use crate::render::palette;
use crate::types::{
    Caption, GlowFilter, Label, Legend, LotteryProfile, Marker, ProfileTable, Scene, Swatch,
    WheelConfig,
};

/// Stroke width of number markers.
pub const MARKER_STROKE_WIDTH: f64 = 2.0;

/// Distance of the legend baseline above the bottom edge.
pub const LEGEND_OFFSET: f64 = 20.0;

/// Caption prefix shown before the strategy name.
pub const LEGEND_PREFIX: &str = "Estratégia";

/// Look up the configured lottery and build its scene.
pub fn scene_for(profiles: &ProfileTable, config: &WheelConfig) -> Result<Scene> {
    let profile = profiles
        .get(&config.lottery_type)
        .ok_or_else(|| WheelError::UnsupportedLottery(config.lottery_type.clone()))?;
    Ok(build_scene(profile, config))
}

/// Lay out every number of `profile` and style it according to `config`.
pub fn build_scene(profile: &LotteryProfile, config: &WheelConfig) -> Scene {
    let layout = WheelLayout::new(profile.grid, config.width, config.height, config.margin);
    let (fill, stroke) = config.strategy.colors();

    let markers = (profile.min()..=profile.max())
        .map(|number| {
            let index = number - profile.min();
            let (cx, cy) = layout.center(index);
            let highlighted = config.is_highlighted(number);
            let (marker_fill, marker_stroke, label_fill) = if highlighted {
                (fill, stroke, palette::HIGHLIGHT_TEXT)
            } else {
                (palette::NEUTRAL_FILL, palette::NEUTRAL_STROKE, palette::TEXT)
            };
            Marker {
                number,
                cx,
                cy,
                radius: layout.radius,
                fill: marker_fill.to_string(),
                stroke: marker_stroke.to_string(),
                stroke_width: MARKER_STROKE_WIDTH,
                highlighted,
                label: Label {
                    x: cx,
                    y: cy,
                    text: number.to_string(),
                    font_size: layout.font_size(),
                    bold: highlighted,
                    fill: label_fill.to_string(),
                },
            }
        })
        .collect();

    Scene {
        width: config.width,
        height: config.height,
        markers,
        glow: GlowFilter::default(),
        legend: Legend {
            x: config.margin,
            y: config.height - LEGEND_OFFSET,
            swatch: Swatch {
                cx: 10.0,
                cy: -10.0,
                radius: 8.0,
                fill: fill.to_string(),
                stroke: stroke.to_string(),
                stroke_width: 1.0,
            },
            caption: Caption {
                x: 25.0,
                y: -7.0,
                font_size: 12.0,
                fill: palette::TEXT.to_string(),
                text: format!("{LEGEND_PREFIX}: {}", config.strategy.display_name()),
            },
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::Strategy;

    #[test]
    fn test_legend_for_unknown_strategy() {
        let table = ProfileTable::builtin();
        let config = WheelConfig::new("quina", [1], Strategy::from_key("mystery"));
        let scene = scene_for(&table, &config).unwrap();
        assert_eq!(scene.legend.caption.text, "Estratégia: Desconhecida");
        assert_eq!(scene.legend.swatch.fill, "#6c757d");
        assert_eq!(scene.marker(1).unwrap().fill, "#6c757d");
    }

    #[test]
    fn test_legend_position_follows_margin_and_height() {
        let table = ProfileTable::builtin();
        let config = WheelConfig {
            width: 400.0,
            height: 500.0,
            margin: 25.0,
            ..WheelConfig::default()
        };
        let scene = scene_for(&table, &config).unwrap();
        assert_eq!(scene.legend.x, 25.0);
        assert_eq!(scene.legend.y, 480.0);
    }

    #[test]
    fn test_unsupported_lottery() {
        let table = ProfileTable::builtin();
        let config = WheelConfig::new("bingo", [1, 2], Strategy::Random);
        let err = scene_for(&table, &config).unwrap_err();
        assert!(matches!(err, WheelError::UnsupportedLottery(key) if key == "bingo"));
    }

    #[test]
    fn test_labels_match_numbers() {
        let table = ProfileTable::builtin();
        let scene = scene_for(&table, &WheelConfig::default()).unwrap();
        assert_eq!(scene.markers.len(), 60);
        assert_eq!(scene.markers[0].label.text, "1");
        assert_eq!(scene.markers[59].label.text, "60");
        assert!(scene.markers.iter().all(|m| !m.label.bold));
    }
}
