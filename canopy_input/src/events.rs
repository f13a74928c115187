// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized input events consumed by the controllers.
//!
//! Positions are in screen space, as reported by the host's pointer and
//! wheel events. Event normalization (DOM, winit, or otherwise) happens
//! upstream; these types carry only what the controllers consume.

use kurbo::Point;

/// A normalized wheel event: a vertical delta plus the pointer position.
///
/// A negative `delta_y` indicates scroll‑up and zooms in; zero or positive
/// deltas zoom out. The controllers mark every wheel event they process as
/// default‑prevented so the host can suppress its native scroll behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Vertical scroll delta. Only the sign is interpreted.
    pub delta_y: f64,
    /// Pointer position in screen space; the zoom anchor.
    pub pos: Point,
    default_prevented: bool,
}

impl WheelEvent {
    /// Creates a wheel event from a vertical delta and a screen position.
    #[must_use]
    pub fn new(delta_y: f64, pos: Point) -> Self {
        Self {
            delta_y,
            pos,
            default_prevented: false,
        }
    }

    /// Marks the event's default action as suppressed.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` if the event's default action has been suppressed.
    ///
    /// The host should skip its native scroll handling when this is set.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A normalized input event, for hosts that prefer a single dispatch
/// entry point over the typed methods on [`GraphInput`](crate::GraphInput).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed at a screen position.
    PointerDown(Point),
    /// The pointer moved to a screen position.
    PointerMove(Point),
    /// The pointer button was released at a screen position.
    ///
    /// The position is carried for interface completeness; the drag state
    /// machine does not consume it.
    PointerUp(Point),
    /// The wheel turned. Mutated in place to record default prevention.
    Wheel(WheelEvent),
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::WheelEvent;

    #[test]
    fn wheel_event_starts_unprevented() {
        let ev = WheelEvent::new(-120.0, Point::new(10.0, 20.0));
        assert!(!ev.default_prevented());
    }

    #[test]
    fn prevent_default_is_sticky() {
        let mut ev = WheelEvent::new(3.0, Point::ORIGIN);
        ev.prevent_default();
        ev.prevent_default();
        assert!(ev.default_prevented());
    }
}
