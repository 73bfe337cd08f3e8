// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-threaded event dispatch with RAII subscriptions.
//!
//! The original system this crate descends from bound ambient
//! pointer-move/pointer-up listeners at the document level and relied on
//! component teardown to remove them. Here registration is explicit and
//! scoped instead: [`EventSource::subscribe`] returns a [`Subscription`]
//! guard, and dropping the guard unregisters the listener. A component that
//! subscribes on gesture entry and stores the guard in its gesture state
//! cannot forget to unregister on exit.
//!
//! Dispatch is synchronous and in registration order. Listeners may
//! subscribe or drop subscriptions (including their own) from inside a
//! callback; a listener removed mid-dispatch simply stops receiving events,
//! and one added mid-dispatch may first be called on the next emit.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

type Listener<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Registry<E> {
    entries: Vec<(u64, Listener<E>)>,
    next_id: u64,
}

/// A single-threaded event stream with explicitly scoped listeners.
///
/// `E` is the event payload; for pointer streams this is typically a
/// [`PointerSample`](crate::tracker::PointerSample) or a small event enum
/// that also carries the release signal.
pub struct EventSource<E> {
    inner: Rc<RefCell<Registry<E>>>,
}

impl<E> EventSource<E> {
    /// Creates an event source with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                entries: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Registers `listener` and returns the guard that keeps it registered.
    ///
    /// The listener is called for every [`EventSource::emit`] until the
    /// returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> Subscription<E> {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry
            .entries
            .push((id, Rc::new(RefCell::new(listener))));
        Subscription {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Dispatches `event` to every registered listener, in registration order.
    pub fn emit(&self, event: &E) {
        // Listeners are taken one at a time so that callbacks can mutate
        // the registry (subscribe, drop their own guard) without holding a
        // borrow across the call.
        let mut idx = 0;
        loop {
            let listener = {
                let registry = self.inner.borrow();
                match registry.entries.get(idx) {
                    Some((_, listener)) => Rc::clone(listener),
                    None => break,
                }
            };
            (listener.borrow_mut())(event);
            idx += 1;
        }
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl<E> Default for EventSource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventSource<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> core::fmt::Debug for EventSource<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventSource")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// RAII guard for a registered listener.
///
/// Dropping the guard unregisters the listener. Dropping it after the
/// [`EventSource`] itself is gone is fine — there is nothing left to
/// unregister from.
pub struct Subscription<E> {
    registry: Weak<RefCell<Registry<E>>>,
    id: u64,
}

impl<E> Subscription<E> {
    /// Unregisters the listener now, consuming the guard.
    ///
    /// Equivalent to dropping the guard; provided for call sites where the
    /// intent reads better spelled out.
    pub fn cancel(self) {}
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.borrow_mut();
            if let Some(idx) = registry.entries.iter().position(|(id, _)| *id == self.id) {
                registry.entries.remove(idx);
            }
        }
    }
}

impl<E> core::fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::EventSource;

    #[test]
    fn listeners_receive_events_in_order() {
        let source = EventSource::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let seen = Rc::clone(&seen);
            source.subscribe(move |e| seen.borrow_mut().push(("a", *e)))
        };
        let b = {
            let seen = Rc::clone(&seen);
            source.subscribe(move |e| seen.borrow_mut().push(("b", *e)))
        };

        source.emit(&1);
        source.emit(&2);
        assert_eq!(
            *seen.borrow(),
            [("a", 1), ("b", 1), ("a", 2), ("b", 2)]
        );
        drop((a, b));
    }

    #[test]
    fn dropping_the_guard_unregisters() {
        let source = EventSource::<u32>::new();
        let count = Rc::new(RefCell::new(0));

        let sub = {
            let count = Rc::clone(&count);
            source.subscribe(move |_| *count.borrow_mut() += 1)
        };
        source.emit(&1);
        assert_eq!(source.listener_count(), 1);

        drop(sub);
        assert_eq!(source.listener_count(), 0);
        source.emit(&2);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn a_listener_can_drop_its_own_subscription_mid_dispatch() {
        let source = EventSource::<u32>::new();
        let slot: Rc<RefCell<Option<super::Subscription<u32>>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(RefCell::new(0));

        let sub = {
            let slot = Rc::clone(&slot);
            let calls = Rc::clone(&calls);
            source.subscribe(move |_| {
                *calls.borrow_mut() += 1;
                // One-shot: unregister ourselves on the first event.
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);

        source.emit(&1);
        source.emit(&2);
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn guard_outliving_the_source_is_harmless() {
        let source = EventSource::<u32>::new();
        let sub = source.subscribe(|_| {});
        drop(source);
        drop(sub);
    }

    #[test]
    fn cancel_reads_like_drop() {
        let source = EventSource::<u32>::new();
        let sub = source.subscribe(|_| {});
        assert_eq!(source.listener_count(), 1);
        sub.cancel();
        assert_eq!(source.listener_count(), 0);
    }
}
