// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_transform --heading-base-level=0

//! Easel Transform: bounded drag and resize engines for direct manipulation.
//!
//! This crate converts a stream of incremental pointer deltas into element
//! position/size changes while keeping the element inside a bounded
//! container. It is the core of a freeform page composer where rectangular
//! elements are positioned and sized by hand, but it knows nothing about
//! documents, rendering, or event sources: callers feed it deltas (for
//! example from `easel_pointer`) and fresh container bounds, and commit the
//! resulting geometry wherever they keep it.
//!
//! Three pieces cooperate:
//!
//! - [`drag::DragEngine`]: translates an element without changing its size.
//! - [`resize::ResizeEngine`]: resizes along one or two axes depending on
//!   which of 8 handles started the gesture, shifting the element so the
//!   opposite edge stays put.
//! - [`gesture::GestureEngine`]: the `Idle → Dragging/Resizing → Idle` state
//!   machine that owns whichever engine is active and guarantees idempotent
//!   release.
//!
//! ## Overshoot correction
//!
//! The part that is easy to get wrong is what happens when the pointer
//! leaves the container mid-gesture. The element pins at the boundary, and
//! from then on the pointer and the element disagree about where the gesture
//! "is". [`accumulator::AxisCorrection`] tracks that disagreement as a
//! signed per-axis pixel debt: while the debt is non-zero, deltas accrue to
//! the debt instead of moving the element, and only once the pointer has
//! travelled all the way back does the element resume tracking it — with
//! the overshoot past zero folded back in, so there is no snap and no drift.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use easel_transform::drag::DragEngine;
//!
//! let bounds = Size::new(400.0, 300.0);
//! let mut drag = DragEngine::new(Point::new(50.0, 50.0), Size::new(100.0, 80.0));
//!
//! // Free movement inside the container.
//! let pos = drag.on_delta(Vec2::new(10.0, 0.0), bounds);
//! assert_eq!(pos, Point::new(60.0, 50.0));
//!
//! // A huge delta pins the element at the right edge; the unapplied
//! // remainder becomes debt the pointer has to pay back before the
//! // element moves again.
//! let pos = drag.on_delta(Vec2::new(1_000.0, 0.0), bounds);
//! assert_eq!(pos.x, 300.0);
//! ```
//!
//! All updates are synchronous and allocation-free; deltas are applied
//! strictly in arrival order, one committed state per sample.
//!
//! This crate is `no_std`.

#![no_std]

pub mod accumulator;
pub mod drag;
pub mod gesture;
pub mod resize;

/// Tunable constants for the transform engines.
///
/// The two known generations of the original element component used
/// different minimum-size floors (15 px in the richer one, 1 px in the
/// simplest), so the floor is carried here rather than hard-coded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Minimum element width/height in pixels.
    ///
    /// Also the guard that keeps a resize from collapsing an element to
    /// zero or negative size (and aspect-ratio math elsewhere from seeing
    /// a zero axis). Never below 1.0.
    pub min_size: f64,
}

impl EngineConfig {
    /// Creates a config with the given minimum size, normalized to at least `1.0`.
    #[must_use]
    pub fn new(min_size: f64) -> Self {
        Self {
            min_size: min_size.max(1.0),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { min_size: 15.0 }
    }
}
