//! SVG output tests for wheelview
//!
//! Tests for document structure, glow filter, legend group, and the
//! `render_svg` entry point.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use wheelview::render::{svg_data_uri, write_svg};
use wheelview::wheel::scene_for;
use wheelview::{render_svg, ProfileTable, Strategy, WheelConfig, WheelError};

fn scene(lottery_type: &str, numbers: &[u32], strategy: Strategy) -> wheelview::Scene {
    let config = WheelConfig::new(lottery_type, numbers.iter().copied(), strategy);
    scene_for(&ProfileTable::builtin(), &config).unwrap()
}

#[test]
fn test_root_element() {
    let svg = write_svg(&scene("megasena", &[], Strategy::Random)).unwrap();

    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="320" viewBox="0 0 320 320" class="lottery-wheel">"#
    ));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_element_tree_order() {
    let root = scene("lotofacil", &[1], Strategy::HotNumbers).to_element();

    // 25 circle/text pairs, then defs, then the legend group
    assert_eq!(root.children.len(), 25 * 2 + 2);
    assert_eq!(root.children[0].name, "circle");
    assert_eq!(root.children[1].name, "text");
    assert_eq!(root.children[50].name, "defs");
    assert_eq!(root.children[51].name, "g");
    assert_eq!(root.children[51].get_attr("class"), Some("legend"));
    assert_eq!(root.count("circle"), 26);
}

#[test]
fn test_first_marker_geometry() {
    let root = scene("megasena", &[], Strategy::Random).to_element();
    let circle = &root.children[0];
    let label = &root.children[1];

    assert_eq!(circle.get_attr("cx"), Some("52"));
    assert_eq!(circle.get_attr("cy"), Some("60"));
    let radius: f64 = circle.get_attr("r").unwrap().parse().unwrap();
    assert!((radius - 9.6).abs() < 1e-9);
    assert_eq!(circle.get_attr("stroke-width"), Some("2"));
    assert_eq!(label.get_attr("text-anchor"), Some("middle"));
    assert_eq!(label.get_attr("dominant-baseline"), Some("central"));
    assert_eq!(label.get_attr("font-weight"), Some("normal"));
    assert_eq!(label.text.as_deref(), Some("1"));
}

#[test]
fn test_highlighted_marker_uses_glow() {
    let svg = write_svg(&scene("quina", &[8], Strategy::ColdNumbers)).unwrap();

    assert_eq!(svg.matches(r#"filter="url(#glow)""#).count(), 1);
    assert!(svg.contains(r#"<filter id="glow"><feGaussianBlur stdDeviation="2.5" result="coloredBlur"/>"#));
    assert!(svg.contains(
        r#"<feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge>"#
    ));
    assert!(svg.contains(r#"font-weight="bold" fill="white">8</text>"#));
}

#[test]
fn test_glow_defined_without_selection() {
    let svg = write_svg(&scene("quina", &[], Strategy::Random)).unwrap();

    assert!(svg.contains(r#"<filter id="glow">"#));
    assert!(!svg.contains("url(#glow)"));
}

#[test]
fn test_legend_group() {
    let svg = write_svg(&scene("lotofacil", &[], Strategy::Balanced)).unwrap();

    assert!(svg.contains(r#"<g class="legend" transform="translate(40, 300)">"#));
    assert!(svg.contains(
        r##"<circle cx="10" cy="-10" r="8" fill="#fd7e14" stroke="#e76102" stroke-width="1"/>"##
    ));
    assert!(svg.contains(
        r##"<text x="25" y="-7" font-size="12px" fill="#212529">Estratégia: Balanceada</text>"##
    ));
}

#[test]
fn test_unknown_strategy_key_never_reaches_markup() {
    // Only the display name reaches the markup, never the raw key
    let svg = write_svg(&scene("megasena", &[1], Strategy::from_key("<script>"))).unwrap();

    assert!(!svg.contains("<script>"));
    assert!(svg.contains("Estratégia: Desconhecida"));
}

#[test]
fn test_render_svg_from_json() {
    let svg = render_svg(
        r#"{"lotteryType":"lotofacil","width":200,"height":200,"margin":0,"highlightedNumbers":[13],"strategy":"ai_suggested"}"#,
    )
    .unwrap();

    assert!(svg.contains(r#"viewBox="0 0 200 200""#));
    assert_eq!(svg.matches(r##"fill="#6f42c1""##).count(), 2);
    // 5x5 grid of 40px cells: 13 sits in the middle
    assert!(svg.contains(r##"<circle cx="100" cy="100" r="16" fill="#6f42c1""##));
}

#[test]
fn test_render_svg_errors() {
    assert!(matches!(
        render_svg(r#"{"lotteryType":"bingo"}"#),
        Err(WheelError::UnsupportedLottery(key)) if key == "bingo"
    ));
    assert!(matches!(render_svg("{not json"), Err(WheelError::Json(_))));
}

#[test]
fn test_render_svg_ignores_negative_highlights() {
    let svg = render_svg(
        r#"{"lotteryType":"lotofacil","highlightedNumbers":[-3,5],"strategy":"hot_numbers"}"#,
    )
    .unwrap();

    // 25 markers plus the legend swatch
    assert_eq!(svg.matches("<circle").count(), 26);
    assert_eq!(svg.matches(r#"filter="url(#glow)""#).count(), 1);
    assert!(svg.contains(r#"font-weight="bold" fill="white">5</text>"#));
}

#[test]
fn test_render_svg_defaults_to_megasena() {
    let svg = render_svg("{}").unwrap();
    assert_eq!(svg.matches("<circle").count(), 61);
}

#[test]
fn test_data_uri_wraps_markup() {
    let svg = write_svg(&scene("lotofacil", &[], Strategy::Random)).unwrap();
    let uri = svg_data_uri(&svg);

    assert!(uri.starts_with("data:image/svg+xml;base64,PHN2Zy"));
}

#[test]
fn test_scene_serializes_camel_case() {
    let json = serde_json::to_value(scene("lotofacil", &[2], Strategy::HotNumbers)).unwrap();

    assert_eq!(json["markers"].as_array().unwrap().len(), 25);
    assert_eq!(json["markers"][1]["strokeWidth"], 2.0);
    assert_eq!(json["markers"][1]["label"]["fontSize"], json["markers"][0]["label"]["fontSize"]);
    assert_eq!(json["glow"]["stdDeviation"], 2.5);
    assert_eq!(json["legend"]["caption"]["text"], "Estratégia: Números Quentes");
}
