// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plumbing from a pointer event stream into a session.

use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::{Point, Vec2};

use easel_pointer::subscription::{EventSource, Subscription};

use crate::session::Session;

/// One event on a pointer stream, as a windowing shell would deliver it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved to an absolute position.
    Moved(Point),
    /// The content scrolled under the pointer by this offset.
    Scrolled(Vec2),
    /// The pointer was released, wherever it is.
    Released,
}

/// Subscribes `session` to `pointer`, returning the guard that keeps the
/// wiring alive.
///
/// Dropping the returned [`Subscription`] disconnects the session from the
/// stream; events emitted afterwards are not seen. Commit errors cannot
/// occur while the session holds the manipulated item, so the listener
/// discards the `Result`s.
#[must_use = "dropping the subscription disconnects the session"]
pub fn wire(
    session: Rc<RefCell<Session>>,
    pointer: &EventSource<PointerEvent>,
) -> Subscription<PointerEvent> {
    pointer.subscribe(move |event| {
        let mut session = session.borrow_mut();
        match event {
            PointerEvent::Moved(position) => {
                let _ = session.pointer_move(*position);
            }
            PointerEvent::Scrolled(delta) => {
                let _ = session.scroll(*delta);
            }
            PointerEvent::Released => {
                session.release();
            }
        }
    })
}
