// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag state machine: canvas panning vs. node dragging.
//!
//! ## Usage
//!
//! 1) On pointer‑down, call [`DragController::pointer_down`]. A hit‑tested
//!    node starts a node drag and pins it with the layout engine; a miss
//!    starts a canvas pan.
//! 2) On each pointer‑move, call [`DragController::pointer_move`]. Node
//!    drags reposition the node at the cursor's world point; pans shift the
//!    viewport by the raw screen delta.
//! 3) On pointer‑up, call [`DragController::pointer_up`]. A node drag
//!    unpins the node; a pan asks the renderer to cull what scrolled out of
//!    view. Either way the session ends.
//!
//! Pointer‑up is a session's sole termination path; events that have no
//! transition from the current state are ignored.

use kurbo::{Point, Rect};

use canopy_viewport::ViewportTransform;

use crate::bridge::{LayoutBridge, RenderBridge};

/// The current drag session, if any.
///
/// One value per session: created on pointer‑down, reset to [`Idle`] on
/// pointer‑up, never persisted. Folding the active flag and the optional
/// node handle into one enum means they cannot disagree.
///
/// [`Idle`]: DragState::Idle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState<N> {
    /// No pointer button is held.
    #[default]
    Idle,
    /// The pointer went down on empty canvas; moves pan the viewport.
    PanningCanvas {
        /// Last observed pointer position in screen space.
        last_pointer: Point,
    },
    /// The pointer went down on a node; moves reposition it.
    DraggingNode {
        /// The node under the cursor at pointer‑down, pinned for the
        /// duration of the session.
        node: N,
        /// Last observed pointer position in screen space.
        last_pointer: Point,
    },
}

/// Dispatches pointer events to canvas panning or node dragging.
#[derive(Clone, Copy, Debug)]
pub struct DragController<N> {
    state: DragState<N>,
}

impl<N> Default for DragController<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> DragController<N> {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Returns the current drag session state.
    #[must_use]
    pub fn state(&self) -> &DragState<N> {
        &self.state
    }

    /// Returns `true` while a drag session (pan or node) is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }
}

impl<N: Copy> DragController<N> {
    /// Starts a drag session at a screen position.
    ///
    /// The position is converted to world space and hit‑tested against the
    /// scene: a hit pins that node and starts a node drag, a miss starts a
    /// canvas pan. Ignored while a session is already active.
    pub fn pointer_down<R, L>(
        &mut self,
        pos: Point,
        viewport: &ViewportTransform,
        render: &R,
        layout: &mut L,
    ) where
        R: RenderBridge<N>,
        L: LayoutBridge<N>,
    {
        if self.is_active() {
            return;
        }
        let world = viewport.screen_to_world_point(pos);
        self.state = match render.hit_test(world) {
            Some(node) => {
                // The layout engine must not fight the user for this node
                // while the session lasts.
                layout.pin_node(node, true);
                DragState::DraggingNode {
                    node,
                    last_pointer: pos,
                }
            }
            None => DragState::PanningCanvas { last_pointer: pos },
        };
    }

    /// Advances the active session with a new pointer position.
    ///
    /// Node drags reposition the node at the cursor's current world point,
    /// so the node tracks the cursor at any zoom level. Pans apply the raw
    /// screen delta to the translation, without dividing by the scale:
    /// translation lives in screen space, and the view moves by exactly
    /// the pixels the pointer moved. Silently ignored while idle.
    pub fn pointer_move<L>(&mut self, pos: Point, viewport: &mut ViewportTransform, layout: &mut L)
    where
        L: LayoutBridge<N>,
    {
        match &mut self.state {
            DragState::Idle => {}
            DragState::DraggingNode { node, last_pointer } => {
                layout.set_node_position(*node, viewport.screen_to_world_point(pos));
                *last_pointer = pos;
            }
            DragState::PanningCanvas { last_pointer } => {
                viewport.pan_by(pos - *last_pointer);
                *last_pointer = pos;
            }
        }
    }

    /// Ends the active session.
    ///
    /// A node drag unpins its node; a pan culls everything outside the
    /// renderer's current viewport rectangle. Ignored while idle.
    pub fn pointer_up<R, L>(&mut self, render: &mut R, layout: &mut L)
    where
        R: RenderBridge<N>,
        L: LayoutBridge<N>,
    {
        match self.state {
            DragState::Idle => return,
            DragState::DraggingNode { node, .. } => layout.pin_node(node, false),
            DragState::PanningCanvas { .. } => {
                let view = Rect::from_origin_size(Point::ORIGIN, render.view_size());
                render.cull_outside(view);
            }
        }
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use canopy_viewport::ViewportTransform;

    use super::{DragController, DragState};
    use crate::bridge::{LayoutBridge, RenderBridge};

    /// Scene whose hit test always reports the configured node.
    struct FixedScene {
        node: Option<u32>,
        culls: usize,
        last_cull: Option<Rect>,
    }

    impl FixedScene {
        fn hit(node: u32) -> Self {
            Self {
                node: Some(node),
                culls: 0,
                last_cull: None,
            }
        }

        fn miss() -> Self {
            Self {
                node: None,
                culls: 0,
                last_cull: None,
            }
        }
    }

    impl RenderBridge<u32> for FixedScene {
        fn hit_test(&self, _world: Point) -> Option<u32> {
            self.node
        }

        fn cull_outside(&mut self, view: Rect) {
            self.culls += 1;
            self.last_cull = Some(view);
        }

        fn view_size(&self) -> Size {
            Size::new(800.0, 600.0)
        }
    }

    #[derive(Default)]
    struct CountingLayout {
        pins: usize,
        unpins: usize,
        moves: usize,
        last_move: Option<(u32, Point)>,
    }

    impl LayoutBridge<u32> for CountingLayout {
        fn pin_node(&mut self, _node: u32, pinned: bool) {
            if pinned {
                self.pins += 1;
            } else {
                self.unpins += 1;
            }
        }

        fn set_node_position(&mut self, node: u32, world: Point) {
            self.moves += 1;
            self.last_move = Some((node, world));
        }
    }

    #[test]
    fn down_on_node_pins_and_enters_node_drag() {
        let mut drag = DragController::new();
        let viewport = ViewportTransform::new();
        let scene = FixedScene::hit(7);
        let mut layout = CountingLayout::default();

        drag.pointer_down(Point::new(50.0, 50.0), &viewport, &scene, &mut layout);

        assert_eq!(layout.pins, 1);
        assert_eq!(
            *drag.state(),
            DragState::DraggingNode {
                node: 7,
                last_pointer: Point::new(50.0, 50.0),
            }
        );
    }

    #[test]
    fn down_on_empty_canvas_enters_pan() {
        let mut drag = DragController::<u32>::new();
        let viewport = ViewportTransform::new();
        let scene = FixedScene::miss();
        let mut layout = CountingLayout::default();

        drag.pointer_down(Point::new(5.0, 9.0), &viewport, &scene, &mut layout);

        assert_eq!(layout.pins, 0);
        assert_eq!(
            *drag.state(),
            DragState::PanningCanvas {
                last_pointer: Point::new(5.0, 9.0),
            }
        );
    }

    #[test]
    fn node_drag_moves_node_to_cursor_world_point() {
        let mut drag = DragController::new();
        let mut viewport = ViewportTransform::new();
        viewport.set_scale(2.0);
        viewport.set_translation(Vec2::new(10.0, -20.0));
        let scene = FixedScene::hit(3);
        let mut layout = CountingLayout::default();

        drag.pointer_down(Point::new(0.0, 0.0), &viewport, &scene, &mut layout);
        let pos = Point::new(110.0, 80.0);
        drag.pointer_move(pos, &mut viewport, &mut layout);

        let expected = viewport.screen_to_world_point(pos);
        assert_eq!(layout.moves, 1);
        assert_eq!(layout.last_move, Some((3, expected)));
        // The viewport is untouched by a node drag.
        assert_eq!(viewport.translation(), Vec2::new(10.0, -20.0));
    }

    #[test]
    fn pan_applies_raw_delta_and_tracks_last_pointer() {
        let mut drag = DragController::<u32>::new();
        let mut viewport = ViewportTransform::new();
        viewport.set_scale(4.0);
        let scene = FixedScene::miss();
        let mut layout = CountingLayout::default();

        drag.pointer_down(Point::new(100.0, 100.0), &viewport, &scene, &mut layout);
        drag.pointer_move(Point::new(150.0, 130.0), &mut viewport, &mut layout);
        drag.pointer_move(Point::new(160.0, 135.0), &mut viewport, &mut layout);

        // Screen-space exactness, independent of the 4x scale.
        assert_eq!(viewport.translation(), Vec2::new(60.0, 35.0));
        assert_eq!(layout.moves, 0);
    }

    #[test]
    fn up_from_node_drag_unpins_without_culling() {
        let mut drag = DragController::new();
        let viewport = ViewportTransform::new();
        let mut scene = FixedScene::hit(7);
        let mut layout = CountingLayout::default();

        drag.pointer_down(Point::new(1.0, 1.0), &viewport, &scene, &mut layout);
        drag.pointer_up(&mut scene, &mut layout);

        assert_eq!(layout.unpins, 1);
        assert_eq!(scene.culls, 0);
        assert!(!drag.is_active());
    }

    #[test]
    fn up_from_pan_culls_the_full_viewport_once() {
        let mut drag = DragController::<u32>::new();
        let viewport = ViewportTransform::new();
        let mut scene = FixedScene::miss();
        let mut layout = CountingLayout::default();

        drag.pointer_down(Point::new(1.0, 1.0), &viewport, &scene, &mut layout);
        drag.pointer_up(&mut scene, &mut layout);

        assert_eq!(scene.culls, 1);
        assert_eq!(scene.last_cull, Some(Rect::new(0.0, 0.0, 800.0, 600.0)));
        assert_eq!(layout.unpins, 0);
        assert!(!drag.is_active());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut drag = DragController::<u32>::new();
        let mut viewport = ViewportTransform::new();
        let mut layout = CountingLayout::default();

        drag.pointer_move(Point::new(40.0, 40.0), &mut viewport, &mut layout);

        assert_eq!(viewport.translation(), Vec2::ZERO);
        assert_eq!(layout.moves, 0);
    }

    #[test]
    fn up_while_idle_is_ignored() {
        let mut drag = DragController::<u32>::new();
        let mut scene = FixedScene::miss();
        let mut layout = CountingLayout::default();

        drag.pointer_up(&mut scene, &mut layout);

        assert_eq!(scene.culls, 0);
        assert_eq!(layout.unpins, 0);
    }

    #[test]
    fn second_down_during_a_session_is_ignored() {
        let mut drag = DragController::new();
        let viewport = ViewportTransform::new();
        let scene = FixedScene::hit(9);
        let mut layout = CountingLayout::default();

        drag.pointer_down(Point::new(0.0, 0.0), &viewport, &scene, &mut layout);
        drag.pointer_down(Point::new(30.0, 30.0), &viewport, &scene, &mut layout);

        // Still the original session: one pin, original anchor position.
        assert_eq!(layout.pins, 1);
        assert_eq!(
            *drag.state(),
            DragState::DraggingNode {
                node: 9,
                last_pointer: Point::new(0.0, 0.0),
            }
        );
    }

    #[test]
    fn sessions_repin_on_each_down() {
        let mut drag = DragController::new();
        let viewport = ViewportTransform::new();
        let mut scene = FixedScene::hit(2);
        let mut layout = CountingLayout::default();

        for _ in 0..2 {
            drag.pointer_down(Point::new(0.0, 0.0), &viewport, &scene, &mut layout);
            drag.pointer_up(&mut scene, &mut layout);
        }

        assert_eq!(layout.pins, 2);
        assert_eq!(layout.unpins, 2);
    }
}
