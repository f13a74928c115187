// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces the controllers depend on.
//!
//! The controllers never see a concrete renderer or layout engine; they
//! see these two traits, implemented by the application at construction
//! time. Node identity is a copyable application id `N`, so the only thing
//! that crosses either bridge is an id plus geometry — node storage stays
//! with the layout engine and scene storage stays with the renderer.
//!
//! A missing bridge operation is a compile error at the
//! [`GraphInput`](crate::GraphInput) construction site, never a per‑event
//! condition.

use kurbo::{Point, Rect, Size};

/// Contract consumed from the renderer.
pub trait RenderBridge<N> {
    /// Returns the topmost node at a world‑space point, if any.
    ///
    /// A miss is a normal outcome, not an error: it selects the canvas‑pan
    /// branch of the drag state machine.
    fn hit_test(&self, world: Point) -> Option<N>;

    /// Hides scene elements that fall outside the given screen‑space view
    /// rectangle.
    ///
    /// Invoked once per canvas‑pan release, with the full renderer
    /// viewport at origin `(0, 0)`.
    fn cull_outside(&mut self, view: Rect);

    /// Returns the renderer's current viewport size in pixels.
    fn view_size(&self) -> Size;
}

/// Contract consumed from the force‑directed layout engine.
pub trait LayoutBridge<N> {
    /// Pins or unpins a node.
    ///
    /// While pinned, the layout engine must not move the node through its
    /// own simulation; the node is entirely under the caller's control.
    fn pin_node(&mut self, node: N, pinned: bool);

    /// Sets a node's world‑space position.
    fn set_node_position(&mut self, node: N, world: Point);
}
