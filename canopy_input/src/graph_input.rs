// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction‑time wiring of the controllers against a bridge pair.

use kurbo::Point;

use canopy_viewport::ViewportTransform;

use crate::bridge::{LayoutBridge, RenderBridge};
use crate::drag::{DragController, DragState};
use crate::events::{InputEvent, WheelEvent};
use crate::zoom::ZoomController;

/// The assembled interaction controller for one graph view.
///
/// `GraphInput` owns the viewport transform, the zoom and drag
/// controllers, and the two collaborator bridges. The application forwards
/// its normalized input events into [`handle`](Self::handle) (or the typed
/// entry points) and reads the live transform back out through
/// [`viewport`](Self::viewport) each paint.
///
/// All wiring happens here, once, at construction: there is no
/// process‑wide listener state, and the trait bounds make an incomplete
/// bridge a compile error rather than a per‑event failure.
#[derive(Debug)]
pub struct GraphInput<N, R, L> {
    viewport: ViewportTransform,
    zoom: ZoomController,
    drag: DragController<N>,
    render: R,
    layout: L,
}

impl<N, R, L> GraphInput<N, R, L>
where
    N: Copy,
    R: RenderBridge<N>,
    L: LayoutBridge<N>,
{
    /// Wires the controllers against a renderer and a layout engine, with
    /// an identity transform.
    #[must_use]
    pub fn new(render: R, layout: L) -> Self {
        Self::with_viewport(ViewportTransform::new(), render, layout)
    }

    /// Like [`new`](Self::new), but starting from an existing transform
    /// (for example one restored from a previous view).
    #[must_use]
    pub fn with_viewport(viewport: ViewportTransform, render: R, layout: L) -> Self {
        Self {
            viewport,
            zoom: ZoomController::new(),
            drag: DragController::new(),
            render,
            layout,
        }
    }

    /// Dispatches one normalized input event to the owning controller.
    pub fn handle(&mut self, event: &mut InputEvent) {
        match event {
            InputEvent::PointerDown(pos) => self.pointer_down(*pos),
            InputEvent::PointerMove(pos) => self.pointer_move(*pos),
            InputEvent::PointerUp(_) => self.pointer_up(),
            InputEvent::Wheel(wheel) => self.wheel(wheel),
        }
    }

    /// Applies a wheel event: one anchored zoom step at the pointer, with
    /// the event marked default‑prevented.
    pub fn wheel(&mut self, event: &mut WheelEvent) {
        self.zoom.handle_wheel(event, &mut self.viewport);
    }

    /// Starts a drag session (node drag or canvas pan) at a screen
    /// position.
    pub fn pointer_down(&mut self, pos: Point) {
        self.drag
            .pointer_down(pos, &self.viewport, &self.render, &mut self.layout);
    }

    /// Advances the active drag session; a no‑op while idle.
    pub fn pointer_move(&mut self, pos: Point) {
        self.drag
            .pointer_move(pos, &mut self.viewport, &mut self.layout);
    }

    /// Ends the active drag session; a no‑op while idle.
    pub fn pointer_up(&mut self) {
        self.drag.pointer_up(&mut self.render, &mut self.layout);
    }

    /// The live transform the renderer reads each paint.
    #[must_use]
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    /// Mutable access to the transform, e.g. for programmatic navigation.
    #[must_use]
    pub fn viewport_mut(&mut self) -> &mut ViewportTransform {
        &mut self.viewport
    }

    /// The current drag session state.
    #[must_use]
    pub fn drag_state(&self) -> DragState<N> {
        *self.drag.state()
    }

    /// The render bridge.
    #[must_use]
    pub fn render_bridge(&self) -> &R {
        &self.render
    }

    /// Mutable access to the render bridge.
    #[must_use]
    pub fn render_bridge_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// The layout bridge.
    #[must_use]
    pub fn layout_bridge(&self) -> &L {
        &self.layout
    }

    /// Mutable access to the layout bridge.
    #[must_use]
    pub fn layout_bridge_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    /// Tears the wiring down, returning the bridges to the caller.
    #[must_use]
    pub fn into_bridges(self) -> (R, L) {
        (self.render, self.layout)
    }
}
