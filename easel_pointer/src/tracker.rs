// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer sampling: absolute positions in, incremental deltas out.

use kurbo::{Point, Rect, Vec2};

/// One pointer sample: where the pointer is and how far it moved since the
/// previous sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Absolute pointer position.
    pub position: Point,
    /// Movement since the previous sample; `Vec2::ZERO` for the first
    /// sample after a (re)bind.
    pub delta: Vec2,
}

/// Converts a stream of absolute pointer positions (and scroll-offset
/// changes) into incremental [`PointerSample`]s.
///
/// The tracker is a plain synchronous state machine: each input yields at
/// most one sample, immediately, with no buffering and no allocation. It
/// can optionally be scoped to a rectangle, mirroring a listener bound to
/// a single element rather than the whole viewport: positions outside the
/// scope produce no sample and suspend the stream, so re-entry starts
/// fresh with a zero delta instead of a jump across the gap.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    scope: Option<Rect>,
    last: Option<Point>,
}

impl PointerTracker {
    /// Creates a tracker sampling over the whole viewport.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scope: None,
            last: None,
        }
    }

    /// Creates a tracker scoped to `scope`.
    #[must_use]
    pub const fn scoped(scope: Rect) -> Self {
        Self {
            scope: Some(scope),
            last: None,
        }
    }

    /// Returns the current scope rectangle, if any.
    #[must_use]
    pub fn scope(&self) -> Option<Rect> {
        self.scope
    }

    /// Returns the most recently sampled position, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.last
    }

    /// Rebinds the tracker to a different scope (or to the whole viewport).
    ///
    /// This tears the stream down and recreates it: the previous position
    /// is forgotten, so the first sample after rebinding carries a zero
    /// delta.
    pub fn rebind(&mut self, scope: Option<Rect>) {
        self.scope = scope;
        self.last = None;
    }

    /// Feeds an absolute pointer position.
    ///
    /// Returns the sample for this movement, or `None` when the position
    /// falls outside the scope rectangle. Leaving the scope suspends the
    /// stream rather than accruing a delta across the gap.
    pub fn pointer_move(&mut self, position: Point) -> Option<PointerSample> {
        if let Some(scope) = self.scope
            && !scope.contains(position)
        {
            self.last = None;
            return None;
        }

        let delta = match self.last {
            Some(last) => position - last,
            None => Vec2::ZERO,
        };
        self.last = Some(position);
        Some(PointerSample { position, delta })
    }

    /// Folds a scroll-offset change into the delta stream.
    ///
    /// A scroll of `delta` moves the content under a stationary pointer,
    /// which for manipulation purposes is the same as the pointer moving by
    /// `delta` over the content. The pointer position itself is unchanged.
    /// Returns `None` if no pointer position has been sampled yet (there is
    /// nothing for the scroll to move relative to).
    pub fn scroll_by(&mut self, delta: Vec2) -> Option<PointerSample> {
        let position = self.last?;
        Some(PointerSample { position, delta })
    }
}
