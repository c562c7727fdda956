// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame surface math.
//!
//! Measures the work done on every zoom gesture and animation tick:
//! - Anchored offset computation
//! - A full zoom step through the surface model
//! - Scroll clamping

use criterion::{criterion_group, criterion_main, Criterion};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};
use std::hint::black_box;
use zoom_lens::domain::ui::AnimationDuration;
use zoom_lens::media::ImageData;
use zoom_lens::ui::surface::{geometry, ScrollDelegate, ZoomSurface};

fn prepared_surface() -> ZoomSurface {
    let mut surface = ZoomSurface::new(AnimationDuration::from_millis(0));
    surface.set_viewport_bounds(Rectangle::new(Point::ORIGIN, Size::new(1280.0, 720.0)));
    surface.set_image(ImageData::from_rgba(64, 48, vec![0; 64 * 48 * 4]));
    surface
}

fn bench_anchored_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_geometry");

    let viewport = Size::new(1280.0, 720.0);
    let old_content = Size::new(1920.0, 1440.0);
    let new_content = Size::new(2400.0, 1800.0);

    group.bench_function("anchored_offset", |b| {
        b.iter(|| {
            black_box(geometry::anchored_offset(
                black_box(AbsoluteOffset { x: 320.0, y: 200.0 }),
                black_box(Point::new(640.0, 360.0)),
                viewport,
                old_content,
                new_content,
            ))
        });
    });

    group.finish();
}

fn bench_zoom_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_geometry");
    let mut surface = prepared_surface();

    group.bench_function("zoom_in_and_out", |b| {
        b.iter(|| {
            surface.zoom_by(black_box(1.25), Point::new(300.0, 200.0));
            surface.zoom_by(black_box(0.8), Point::new(300.0, 200.0));
        });
    });

    group.finish();
}

fn bench_scroll_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_geometry");
    let mut surface = prepared_surface();
    surface.zoom_by(4.0, Point::new(640.0, 360.0));

    group.bench_function("did_scroll", |b| {
        b.iter(|| black_box(surface.did_scroll(black_box(AbsoluteOffset { x: -50.0, y: 9000.0 }))));
    });

    group.finish();
}

criterion_group!(benches, bench_anchored_offset, bench_zoom_step, bench_scroll_clamp);
criterion_main!(benches);
