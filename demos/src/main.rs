// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted interaction session over an in-memory graph scene.
//!
//! Wires `GraphInput` against toy renderer and layout-engine bridges, then
//! replays a wheel zoom, a node drag, and a canvas pan, printing the
//! observable effects after each step.
//!
//! Run:
//! - `cargo run -p canopy_demos`

use std::collections::HashMap;

use kurbo::{Point, Rect, Size};

use canopy_input::{GraphInput, LayoutBridge, RenderBridge, WheelEvent};

const NODE_RADIUS: f64 = 12.0;

/// Toy renderer: nodes are circles in world space.
struct Scene {
    positions: HashMap<u32, Point>,
    size: Size,
}

impl Scene {
    fn new(positions: HashMap<u32, Point>) -> Self {
        Self {
            positions,
            size: Size::new(800.0, 600.0),
        }
    }
}

impl RenderBridge<u32> for Scene {
    fn hit_test(&self, world: Point) -> Option<u32> {
        self.positions
            .iter()
            .find(|(_, center)| world.distance(**center) <= NODE_RADIUS)
            .map(|(id, _)| *id)
    }

    fn cull_outside(&mut self, view: Rect) {
        // A real renderer would hide elements outside this screen-space
        // rect; the demo only reports the request.
        println!("  renderer: cull outside {view:?}");
    }

    fn view_size(&self) -> Size {
        self.size
    }
}

/// Toy layout engine: pinned nodes drop out of the (absent) simulation.
#[derive(Default)]
struct Layout {
    pinned: HashMap<u32, bool>,
    positions: HashMap<u32, Point>,
}

impl LayoutBridge<u32> for Layout {
    fn pin_node(&mut self, node: u32, pinned: bool) {
        self.pinned.insert(node, pinned);
        println!("  layout: node {node} pinned={pinned}");
    }

    fn set_node_position(&mut self, node: u32, world: Point) {
        self.positions.insert(node, world);
        println!("  layout: node {node} moved to ({:.1}, {:.1})", world.x, world.y);
    }
}

fn main() {
    let nodes = HashMap::from([
        (1, Point::new(100.0, 100.0)),
        (2, Point::new(300.0, 220.0)),
        (3, Point::new(520.0, 140.0)),
    ]);
    let mut input = GraphInput::new(Scene::new(nodes), Layout::default());

    println!("== Wheel zoom in at the center ==");
    let mut wheel = WheelEvent::new(-120.0, Point::new(400.0, 300.0));
    input.wheel(&mut wheel);
    println!(
        "  default prevented: {}; viewport: {:?}",
        wheel.default_prevented(),
        input.viewport().debug_info()
    );

    println!("== Drag node 2 ==");
    let on_node = input.viewport().world_to_screen_point(Point::new(300.0, 220.0));
    input.pointer_down(on_node);
    input.pointer_move(Point::new(on_node.x + 40.0, on_node.y + 25.0));
    input.pointer_up();

    println!("== Pan the canvas ==");
    input.pointer_down(Point::new(700.0, 500.0));
    input.pointer_move(Point::new(640.0, 470.0));
    input.pointer_move(Point::new(600.0, 455.0));
    input.pointer_up();
    println!("  viewport: {:?}", input.viewport().debug_info());

    let (_, layout) = input.into_bridges();
    println!("== Final layout state ==");
    println!("  pinned flags: {:?}", layout.pinned);
    println!("  dragged positions: {:?}", layout.positions);
}
