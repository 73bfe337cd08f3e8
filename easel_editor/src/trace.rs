// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for manipulation sessions.
//!
//! The session core stores no history of its own: a gesture is three kinds
//! of moment (start, per-sample commit, release) and embedders that want to
//! watch them register a [`GestureTrace`]. The hooks default to no-ops, so
//! `()` is a valid trace for sessions that need none.
//!
//! [`GestureLog`] is a small shared recorder for tests and debugging: clones
//! share one underlying log, so one clone can live inside the session while
//! another stays with the caller for inspection.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use easel_transform::gesture::{Frame, Manipulation};

/// A callback sink for session gesture tracing.
///
/// All hooks are no-ops by default; implement only the moments of interest.
pub trait GestureTrace {
    /// Called when a press starts a manipulation on `item`.
    fn started(&mut self, item: &str, manipulation: Manipulation) {
        let _ = (item, manipulation);
    }

    /// Called after each pointer sample's frame has been committed to the
    /// document.
    fn committed(&mut self, item: &str, frame: Frame) {
        let _ = (item, frame);
    }

    /// Called when the manipulation on `item` ends.
    fn released(&mut self, item: &str) {
        let _ = item;
    }
}

/// The all-defaults trace: every hook is a no-op.
impl GestureTrace for () {}

/// One recorded gesture moment.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// A manipulation started on `item`.
    Started {
        /// The manipulated item's id.
        item: String,
        /// Which manipulation started.
        manipulation: Manipulation,
    },
    /// A frame was committed for `item`.
    Committed {
        /// The manipulated item's id.
        item: String,
        /// The committed frame.
        frame: Frame,
    },
    /// The manipulation on `item` ended.
    Released {
        /// The manipulated item's id.
        item: String,
    },
}

/// A shared in-memory recorder of gesture moments.
///
/// Cloning is cheap and clones observe the same log.
#[derive(Clone, Debug, Default)]
pub struct GestureLog {
    events: Rc<RefCell<Vec<GestureEvent>>>,
}

impl GestureLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<GestureEvent> {
        self.events.borrow().clone()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Clears the log.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GestureTrace for GestureLog {
    fn started(&mut self, item: &str, manipulation: Manipulation) {
        self.events.borrow_mut().push(GestureEvent::Started {
            item: item.into(),
            manipulation,
        });
    }

    fn committed(&mut self, item: &str, frame: Frame) {
        self.events.borrow_mut().push(GestureEvent::Committed {
            item: item.into(),
            frame,
        });
    }

    fn released(&mut self, item: &str) {
        self.events
            .borrow_mut()
            .push(GestureEvent::Released { item: item.into() });
    }
}
