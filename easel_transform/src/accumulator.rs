// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis overshoot debt for bounded manipulation.
//!
//! When a drag or resize pushes an element against a boundary, the element
//! stops but the pointer keeps going. [`AxisCorrection`] records how far the
//! pointer has diverged from the effective (clamped) value on one axis, in
//! the units of the quantity being manipulated (position pixels for drag,
//! size pixels for resize).
//!
//! The rules, per sample:
//!
//! - While the debt is zero, deltas move the value freely; only the part of
//!   a delta that would cross a limit is withheld and becomes debt.
//! - While the debt is non-zero, the whole delta accrues to the debt and
//!   the value stays pinned.
//! - When a delta drives the debt across zero, the debt resets and the
//!   overshoot past zero re-enters as free movement, so the value catches
//!   up to the pointer smoothly instead of snapping.
//!
//! This gives the "pointer has to travel back before the element resumes
//! moving" behavior, with the element resuming at exactly the moment the
//! pointer re-crosses the point where it left.

/// Signed pixel debt between the reported pointer and the effective value
/// on a single axis.
///
/// Created zeroed at gesture start and discarded at gesture end; it never
/// outlives a single manipulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisCorrection {
    debt: f64,
}

impl AxisCorrection {
    /// Creates a settled (zero-debt) correction.
    #[must_use]
    pub const fn new() -> Self {
        Self { debt: 0.0 }
    }

    /// Returns the outstanding debt. Zero while the value tracks the pointer.
    #[must_use]
    pub fn debt(&self) -> f64 {
        self.debt
    }

    /// Returns `true` if there is no outstanding debt on this axis.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.debt == 0.0
    }

    /// Clears any outstanding debt.
    pub fn reset(&mut self) {
        self.debt = 0.0;
    }

    /// Advances `current` by `delta` within `[min, max]`, absorbing any
    /// out-of-range movement into the debt.
    ///
    /// `max` is normalized to at least `min`, so a container that is smaller
    /// than the element (or not yet measured) degrades to a single pinned
    /// value rather than an inverted range.
    pub fn apply(&mut self, current: f64, delta: f64, min: f64, max: f64) -> f64 {
        let max = max.max(min);

        if self.debt != 0.0 {
            let previous = self.debt;
            let next = previous + delta;
            if previous * next < 0.0 {
                // The pointer crossed back over the point where it left the
                // valid range; the overshoot resumes as free movement.
                self.debt = 0.0;
                return self.track(current, next, min, max);
            }
            self.debt = next;
            // Re-clamp in case the limits moved while pinned (the container
            // can resize between samples).
            return current.clamp(min, max);
        }

        self.track(current, delta, min, max)
    }

    /// Free movement: clamps the candidate and accrues only the withheld part.
    fn track(&mut self, current: f64, delta: f64, min: f64, max: f64) -> f64 {
        let candidate = current + delta;
        if candidate < min {
            self.debt += candidate - min;
            min
        } else if candidate > max {
            self.debt += candidate - max;
            max
        } else {
            candidate
        }
    }
}
