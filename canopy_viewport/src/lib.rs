// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Viewport: the camera model for interactive graph views.
//!
//! This crate provides a small, headless camera over a world‑space plane:
//! a uniform scale plus a screen‑space translation, with cached affine
//! transforms for converting between the two spaces. It focuses on:
//! - Screen ↔ world coordinate conversion.
//! - Anchor‑preserving zoom: the world point under the pointer stays put.
//! - Screen‑space panning.
//! - Deriving the visible world region for culling.
//!
//! It does **not** own a scene graph, perform hit testing, or paint.
//! Callers are expected to:
//! - Keep node positions and scene content in their own structures.
//! - Read the transform each paint and apply it to their renderer.
//! - Wire pointer/wheel input into pan/zoom operations at a higher layer
//!   (for example with `canopy_input`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use canopy_viewport::ViewportTransform;
//!
//! let mut view = ViewportTransform::new();
//!
//! // Zoom in around a pointer position; the world point under the
//! // pointer stays visually fixed.
//! let anchor = Point::new(400.0, 300.0);
//! let before = view.screen_to_world_point(anchor);
//! view.apply_anchored_zoom(1.1, anchor);
//! let after = view.screen_to_world_point(anchor);
//! assert!((after - before).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis‑aligned with a **uniform** zoom factor; rotation is
//!   not modeled.
//! - Translation lives in screen space, so panning moves the view by
//!   exactly the pixels the pointer moved at any zoom level.
//! - Both affine transforms are cached and rebuilt when scale or
//!   translation change. Conversions on the input hot path are pure reads:
//!   no allocation and no per‑call matrix inversion.
//!
//! This crate is `no_std`.

#![no_std]

mod transform;

pub use transform::{ViewportDebugInfo, ViewportTransform};
