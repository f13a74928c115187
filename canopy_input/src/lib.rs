// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Input: pointer and wheel interaction controllers for graph views.
//!
//! This crate turns normalized input events into camera pan/zoom and
//! per‑node dragging over a [`ViewportTransform`]. It provides:
//!
//! - [`ZoomController`]: wheel events → anchor‑preserving zoom steps.
//! - [`DragController`]: a pointer down/move/up state machine that
//!   dispatches between canvas panning and node dragging, coordinating
//!   pin state with the layout engine.
//! - [`RenderBridge`] / [`LayoutBridge`]: the collaborator interfaces the
//!   controllers depend on instead of any concrete renderer or layout type.
//! - [`GraphInput`]: construction‑time wiring of the controllers against a
//!   pair of bridges, with a single event entry point and no process‑wide
//!   listener state.
//!
//! ## Design Philosophy
//!
//! The controllers are designed to be:
//!
//! - **Minimal and focused**: each handles one interaction pattern.
//! - **Stateful but simple**: a drag session is a single small value,
//!   created on pointer‑down and discarded on pointer‑up.
//! - **Integration-friendly**: hit testing, culling, and node physics stay
//!   behind the bridge traits; the application feeds events in and reads
//!   the transform out.
//! - **Generic**: node identity is an application‑specific copyable id.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use canopy_input::{GraphInput, LayoutBridge, RenderBridge, WheelEvent};
//!
//! struct Scene;
//! impl RenderBridge<u32> for Scene {
//!     fn hit_test(&self, world: Point) -> Option<u32> {
//!         (world.distance(Point::new(50.0, 50.0)) < 10.0).then_some(7)
//!     }
//!     fn cull_outside(&mut self, _view: Rect) {}
//!     fn view_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//! }
//!
//! struct Layout;
//! impl LayoutBridge<u32> for Layout {
//!     fn pin_node(&mut self, _node: u32, _pinned: bool) {}
//!     fn set_node_position(&mut self, _node: u32, _world: Point) {}
//! }
//!
//! let mut input = GraphInput::new(Scene, Layout);
//!
//! // Wheel up zooms in around the pointer and suppresses the default
//! // scroll behavior.
//! let mut wheel = WheelEvent::new(-120.0, Point::new(400.0, 300.0));
//! input.wheel(&mut wheel);
//! assert!(wheel.default_prevented());
//! assert!((input.viewport().scale() - 1.1).abs() < 1e-12);
//!
//! // A pointer-down on empty canvas starts a pan; moves shift the view
//! // by the raw pointer delta.
//! input.pointer_down(Point::new(200.0, 200.0));
//! input.pointer_move(Point::new(215.0, 208.0));
//! input.pointer_up();
//! ```
//!
//! ## Coordinate spaces
//!
//! Pointer and wheel positions arrive in screen space. Panning applies the
//! raw screen‑space delta to the viewport translation, so the view moves by
//! exactly the pixels the pointer moved at any zoom level. Node dragging
//! converts the pointer through [`ViewportTransform::screen_to_world_point`]
//! because node positions live in world space and must track the cursor
//! regardless of zoom.
//!
//! ## Concurrency
//!
//! Everything here is single‑threaded and synchronous: each event is fully
//! processed before the next one, and the only mutable state is touched
//! from the event‑handling thread. Wheel and pointer streams are
//! independent; a zoom during an active drag does not alter drag state,
//! and the next pointer‑move simply recomputes from the post‑zoom
//! transform.
//!
//! This crate is `no_std`.

#![no_std]

mod bridge;
mod drag;
mod events;
mod graph_input;
mod zoom;

pub use bridge::{LayoutBridge, RenderBridge};
pub use drag::{DragController, DragState};
pub use events::{InputEvent, WheelEvent};
pub use graph_input::GraphInput;
pub use zoom::{WHEEL_ZOOM_STEP, ZoomController};

pub use canopy_viewport::ViewportTransform;
