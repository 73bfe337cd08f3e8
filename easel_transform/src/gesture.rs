// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Manipulation state machine: `Idle → Dragging → Idle`, `Idle → Resizing → Idle`.
//!
//! A [`GestureEngine`] owns whichever sub-engine is active and enforces the
//! gesture protocol:
//!
//! - Only one manipulation can be active at a time; a press while non-idle
//!   is refused (a handle press claims the gesture before the element body
//!   sees it, so a resize never doubles as a drag).
//! - Release is unconditional and idempotent: it ends whichever gesture is
//!   active regardless of where the pointer is, and releasing while idle is
//!   a no-op.
//! - Deltas while idle are ignored.
//!
//! The per-gesture correction debt lives inside the sub-engines, so it is
//! created zeroed on press and discarded on release by construction.

use kurbo::{Point, Size, Vec2};

use crate::EngineConfig;
use crate::drag::DragEngine;
use crate::resize::{Direction, ResizeEngine};

/// Which manipulation, if any, is currently active.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Manipulation {
    /// No gesture in progress.
    Idle,
    /// The element body is being dragged.
    Dragging,
    /// A resize handle is being dragged.
    Resizing(Direction),
}

impl Manipulation {
    /// Returns `true` for `Dragging` or `Resizing`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// A committed `(position, size)` pair, produced once per sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Top-left offset of the element relative to its container.
    pub position: Point,
    /// Pixel size of the element.
    pub size: Size,
}

enum Mode {
    Idle,
    Dragging(DragEngine),
    Resizing(ResizeEngine),
}

/// State machine driving one element's drag/resize gestures.
///
/// While a gesture is active the engine exclusively owns the element's
/// geometry; the caller commits every returned [`Frame`] back to its
/// element record and must not write position or size from anywhere else
/// until release.
#[derive(Debug)]
pub struct GestureEngine {
    config: EngineConfig,
    mode: Mode,
}

impl core::fmt::Debug for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Idle => f.write_str("Idle"),
            Self::Dragging(_) => f.write_str("Dragging"),
            Self::Resizing(engine) => write!(f, "Resizing({:?})", engine.direction()),
        }
    }
}

impl GestureEngine {
    /// Creates an idle engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            mode: Mode::Idle,
        }
    }

    /// Returns the current manipulation state.
    #[must_use]
    pub fn manipulation(&self) -> Manipulation {
        match &self.mode {
            Mode::Idle => Manipulation::Idle,
            Mode::Dragging(_) => Manipulation::Dragging,
            Mode::Resizing(engine) => Manipulation::Resizing(engine.direction()),
        }
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.manipulation().is_active()
    }

    /// Enters `Dragging` from a press on the element body.
    ///
    /// Returns `false` (and changes nothing) if a gesture is already active.
    pub fn begin_drag(&mut self, position: Point, size: Size) -> bool {
        if self.is_active() {
            return false;
        }
        self.mode = Mode::Dragging(DragEngine::new(position, size));
        true
    }

    /// Enters `Resizing(direction)` from a press on a resize handle.
    ///
    /// Returns `false` (and changes nothing) if a gesture is already active.
    pub fn begin_resize(&mut self, direction: Direction, position: Point, size: Size) -> bool {
        if self.is_active() {
            return false;
        }
        self.mode = Mode::Resizing(ResizeEngine::new(direction, position, size, self.config));
        true
    }

    /// Feeds one pointer delta to the active sub-engine.
    ///
    /// Returns the frame to commit, or `None` while idle. `bounds` is the
    /// container's live pixel size, queried fresh by the caller for every
    /// sample.
    pub fn on_delta(&mut self, delta: Vec2, bounds: Size) -> Option<Frame> {
        match &mut self.mode {
            Mode::Idle => None,
            Mode::Dragging(engine) => {
                let position = engine.on_delta(delta, bounds);
                Some(Frame {
                    position,
                    size: engine.size(),
                })
            }
            Mode::Resizing(engine) => {
                let (position, size) = engine.on_delta(delta, bounds);
                Some(Frame { position, size })
            }
        }
    }

    /// Ends the active gesture, if any.
    ///
    /// Driven by the document-wide pointer-release signal, so it fires
    /// wherever the pointer happens to be. Returns `true` if a gesture was
    /// actually ended; releasing while idle is a no-op.
    pub fn release(&mut self) -> bool {
        if self.is_active() {
            self.mode = Mode::Idle;
            true
        } else {
            false
        }
    }
}
