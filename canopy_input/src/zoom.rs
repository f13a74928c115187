// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel‑driven zoom: delta sign → scale step → anchored zoom.

use canopy_viewport::ViewportTransform;

use crate::events::WheelEvent;

/// Multiplicative zoom step per wheel event.
///
/// A wheel‑up event scales by `1.0 + WHEEL_ZOOM_STEP`, a wheel‑down event
/// by `1.0 - WHEEL_ZOOM_STEP`. Both factors are strictly positive, so the
/// viewport scale can never reach zero or go negative.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Translates wheel events into anchor‑preserving zoom steps.
///
/// The in/out factors (`1.1` / `0.9`) are intentionally not reciprocal:
/// one zoom‑in followed by one zoom‑out at the same anchor leaves the
/// scale at `0.99 ×` its original value. This matches long‑standing
/// interaction behavior and is preserved deliberately; do not "fix" it to
/// a reciprocal pair without a product‑level decision.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZoomController;

impl ZoomController {
    /// Creates a zoom controller.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Applies one zoom step around the event's pointer position.
    ///
    /// Every invocation marks the event default‑prevented, so the host can
    /// suppress its native scroll behavior. A negative `delta_y`
    /// (scroll‑up) zooms in; zero or positive zooms out.
    pub fn handle_wheel(&self, event: &mut WheelEvent, viewport: &mut ViewportTransform) {
        event.prevent_default();
        viewport.apply_anchored_zoom(wheel_zoom_factor(event.delta_y), event.pos);
    }
}

fn wheel_zoom_factor(delta_y: f64) -> f64 {
    let direction = if delta_y < 0.0 { 1.0 } else { -1.0 };
    1.0 + direction * WHEEL_ZOOM_STEP
}
