// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the pointer-move hot path: coordinate conversion,
//! anchored zoom, and a full pan session through the drag controller.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};

use canopy_input::{GraphInput, LayoutBridge, RenderBridge};
use canopy_viewport::ViewportTransform;

/// Bridges that absorb every call; the benchmarks measure controller and
/// transform work, not scene bookkeeping.
struct NullScene;

impl RenderBridge<u32> for NullScene {
    fn hit_test(&self, _world: Point) -> Option<u32> {
        None
    }

    fn cull_outside(&mut self, _view: Rect) {}

    fn view_size(&self) -> Size {
        Size::new(1920.0, 1080.0)
    }
}

struct NullLayout;

impl LayoutBridge<u32> for NullLayout {
    fn pin_node(&mut self, _node: u32, _pinned: bool) {}

    fn set_node_position(&mut self, _node: u32, _world: Point) {}
}

fn bench_screen_to_world(c: &mut Criterion) {
    let mut view = ViewportTransform::new();
    view.set_scale(1.7);
    view.set_translation(Vec2::new(-120.0, 64.0));

    c.bench_function("screen_to_world_point", |b| {
        b.iter(|| view.screen_to_world_point(black_box(Point::new(412.0, 287.0))));
    });
}

fn bench_anchored_zoom(c: &mut Criterion) {
    c.bench_function("anchored_zoom_in_out_pair", |b| {
        b.iter(|| {
            let mut view = ViewportTransform::new();
            view.apply_anchored_zoom(1.1, black_box(Point::new(400.0, 300.0)));
            view.apply_anchored_zoom(0.9, black_box(Point::new(400.0, 300.0)));
            black_box(view.scale())
        });
    });
}

fn bench_pan_session(c: &mut Criterion) {
    c.bench_function("pan_session_100_moves", |b| {
        b.iter(|| {
            let mut input = GraphInput::<u32, _, _>::new(NullScene, NullLayout);
            input.pointer_down(Point::new(0.0, 0.0));
            for i in 1..=100 {
                let step = f64::from(i);
                input.pointer_move(black_box(Point::new(step, step * 0.5)));
            }
            input.pointer_up();
            black_box(input.viewport().translation())
        });
    });
}

criterion_group!(
    benches,
    bench_screen_to_world,
    bench_anchored_zoom,
    bench_pan_session
);
criterion_main!(benches);
