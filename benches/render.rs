//! Benchmarks for scene building and SVG serialization.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use wheelview::render::{write_svg, SvgBackend};
use wheelview::wheel::scene_for;
use wheelview::{ProfileTable, Strategy, WheelConfig, WheelRenderer};

fn config_for(lottery_type: &str) -> WheelConfig {
    WheelConfig::new(lottery_type, [1, 5, 13, 25], Strategy::HotNumbers)
}

/// Scene building for every builtin lottery
fn bench_scene(c: &mut Criterion) {
    let profiles = ProfileTable::builtin();
    let mut group = c.benchmark_group("scene_for");

    for profile in profiles.iter() {
        let config = config_for(&profile.key);
        group.throughput(Throughput::Elements(u64::from(profile.total_numbers())));
        group.bench_with_input(BenchmarkId::new("build", &profile.key), &config, |b, config| {
            b.iter(|| scene_for(black_box(&profiles), black_box(config)).expect("Failed to build"))
        });
    }

    group.finish();
}

/// Scene to SVG markup
fn bench_write_svg(c: &mut Criterion) {
    let profiles = ProfileTable::builtin();
    let mut group = c.benchmark_group("write_svg");

    for profile in profiles.iter() {
        let scene = scene_for(&profiles, &config_for(&profile.key)).expect("Failed to build");
        group.bench_with_input(BenchmarkId::new("write", &profile.key), &scene, |b, scene| {
            b.iter(|| write_svg(black_box(scene)).expect("Failed to write"))
        });
    }

    group.finish();
}

/// Full redraw through a renderer after a selection change
fn bench_update(c: &mut Criterion) {
    let profiles = Arc::new(ProfileTable::builtin());
    let mut wheel = WheelRenderer::new(
        SvgBackend::with_surfaces(["wheel"]),
        profiles,
        "wheel",
        config_for("quina"),
    );

    c.bench_function("update_highlighted_numbers", |b| {
        b.iter(|| wheel.update_highlighted_numbers(black_box([2, 4, 8, 16, 32, 64]), None))
    });
}

criterion_group!(benches, bench_scene, bench_write_svg, bench_update);

criterion_main!(benches);
