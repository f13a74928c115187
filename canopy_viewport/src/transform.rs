// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Camera over a world‑space plane: uniform scale plus screen‑space translation.
///
/// `ViewportTransform` is the live transform a renderer reads each paint. It
/// maps world coordinates into screen coordinates as
/// `screen = world * scale + translation`, and caches both the forward and
/// inverse affine so coordinate queries never recompute or allocate.
///
/// The cached pair is rebuilt by every mutator before it returns, so a
/// conversion is always consistent with the last mutation.
///
/// Invariant: `scale > 0` at all times. Mutators ignore values that would
/// violate this rather than clamping or panicking.
#[derive(Clone, Debug)]
pub struct ViewportTransform {
    scale: f64,
    translation: Vec2,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportTransform {
    /// Creates an identity transform: scale `1.0`, zero translation.
    #[must_use]
    pub fn new() -> Self {
        let mut transform = Self {
            scale: 1.0,
            translation: Vec2::ZERO,
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        transform.rebuild();
        transform
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current screen‑space translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Sets the scale factor.
    ///
    /// Non‑finite, zero, or negative values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() || scale <= 0.0 {
            return;
        }
        if (self.scale - scale).abs() < f64::EPSILON {
            return;
        }
        self.scale = scale;
        self.rebuild();
    }

    /// Sets the screen‑space translation.
    pub fn set_translation(&mut self, translation: Vec2) {
        if self.translation == translation {
            return;
        }
        self.translation = translation;
        self.rebuild();
    }

    /// Pans by a delta in screen space.
    ///
    /// The delta is applied to the translation as‑is, without dividing by
    /// the scale: at any zoom level the view moves by exactly the pixels
    /// the pointer moved.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.translation += delta;
        self.rebuild();
    }

    /// Zooms by `factor` while keeping the world point under
    /// `anchor_screen` visually fixed at the anchor.
    ///
    /// Non‑finite, zero, or negative factors are ignored.
    ///
    /// Scale and translation are coupled in the affine map, so the
    /// adjustment happens in two passes: apply the new scale first, measure
    /// how far the anchor's world point drifted under it, then shift the
    /// translation by that drift converted back to screen units. Adjusting
    /// the translation before the new scale is in effect would anchor the
    /// wrong point.
    pub fn apply_anchored_zoom(&mut self, factor: f64, anchor_screen: Point) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let before = self.screen_to_world_point(anchor_screen);
        self.scale *= factor;
        self.rebuild();
        let after = self.screen_to_world_point(anchor_screen);
        self.translation += (after - before) * self.scale;
        self.rebuild();
    }

    /// Converts a screen‑space point into world coordinates.
    #[must_use]
    pub fn screen_to_world_point(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// Converts a world‑space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen_point(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Returns the cached world → screen affine.
    #[must_use]
    pub fn world_to_screen(&self) -> Affine {
        self.world_to_screen
    }

    /// Returns the cached screen → world affine.
    #[must_use]
    pub fn screen_to_world(&self) -> Affine {
        self.screen_to_world
    }

    /// Returns the world‑space rectangle visible through a screen‑space
    /// view rectangle, e.g. for culling off‑screen scene elements.
    #[must_use]
    pub fn visible_world_rect(&self, view: Rect) -> Rect {
        // Scale is uniform and positive, so mapping two opposite corners
        // preserves their ordering.
        let p0 = self.screen_to_world * view.origin();
        let p1 = self.screen_to_world * Point::new(view.max_x(), view.max_y());
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Returns the current world‑units‑per‑pixel ratio.
    ///
    /// This is `1.0 / scale` for the uniform zoom model used here and can
    /// be used to size strokes or labels in world units.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.scale
    }

    /// Snapshot of the current transform state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            scale: self.scale,
            translation: self.translation,
            world_units_per_pixel: self.world_units_per_pixel(),
        }
    }

    fn rebuild(&mut self) {
        // World → screen: scale about the origin, then translate.
        self.world_to_screen = Affine::translate(self.translation) * Affine::scale(self.scale);
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

/// Debug snapshot of a [`ViewportTransform`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current uniform scale factor.
    pub scale: f64,
    /// Current screen‑space translation.
    pub translation: Vec2,
    /// World units covered by one pixel (`1.0 / scale`).
    pub world_units_per_pixel: f64,
}
