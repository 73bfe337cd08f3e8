// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sub-engine: bounded translation of an element.
//!
//! A [`DragEngine`] is created when a drag gesture starts, capturing the
//! element's position and size, and consumes one pointer delta per sample.
//! Each axis is handled independently: the position is clamped into
//! `[0, bound − size]` and any movement the clamp withholds is tracked by an
//! [`AxisCorrection`](crate::accumulator::AxisCorrection) so that pushing
//! past a container edge and coming back feels continuous.
//!
//! The engine returns the committed position on every sample — callers are
//! expected to write it through to their element record each time, so the
//! document always reflects the live drag.

use kurbo::{Point, Size, Vec2};

use crate::accumulator::AxisCorrection;

/// State of a single drag gesture.
///
/// Owns the element's geometry exclusively for the duration of the gesture;
/// no other component should write the element's position while a
/// `DragEngine` for it exists.
#[derive(Clone, Debug)]
pub struct DragEngine {
    position: Point,
    size: Size,
    x: AxisCorrection,
    y: AxisCorrection,
}

impl DragEngine {
    /// Starts a drag from the element's current geometry.
    #[must_use]
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            x: AxisCorrection::new(),
            y: AxisCorrection::new(),
        }
    }

    /// Returns the running (committed) position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the element size captured at gesture start.
    ///
    /// Dragging never changes the size; it is kept only for clamping.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the outstanding per-axis debt as a vector.
    #[must_use]
    pub fn debt(&self) -> Vec2 {
        Vec2::new(self.x.debt(), self.y.debt())
    }

    /// Applies one pointer delta against a fresh bounds snapshot and returns
    /// the new position.
    ///
    /// `bounds` must be queried live on every call; the engine never caches
    /// it, so a container that resizes mid-gesture is picked up on the next
    /// sample. A zero (unmeasured) bound degrades to "no movement on that
    /// axis".
    pub fn on_delta(&mut self, delta: Vec2, bounds: Size) -> Point {
        let max_x = bounds.width - self.size.width;
        let max_y = bounds.height - self.size.height;

        self.position.x = self.x.apply(self.position.x, delta.x, 0.0, max_x);
        self.position.y = self.y.apply(self.position.y, delta.y, 0.0, max_y);
        self.position
    }
}
