// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Event`] notifier and its handles.
//!
//! Listeners live in a `SmallVec` sorted by [`ListenerKey`]. Keys are handed out
//! monotonically, so pushing keeps the vector sorted and lookups for
//! [`Event::unsubscribe`] are a binary search.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};
use core::fmt;

use smallvec::SmallVec;

/// Inline capacity for listener storage.
///
/// Most property nodes are observed by one owner and, at most, one host binding.
const INLINE_LISTENERS: usize = 2;

/// Handle identifying one subscription on an [`Event`].
///
/// Keys are unique per event and never reused, so a stale key can never
/// remove somebody else's listener.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerKey(u64);

impl ListenerKey {
    /// Returns the raw value of this key.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ListenerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListenerKey").field(&self.0).finish()
    }
}

struct Listener {
    key: ListenerKey,
    /// Cleared on unsubscribe so an in-flight dispatch skips it.
    active: Cell<bool>,
    callback: Box<dyn Fn()>,
}

struct Inner {
    next_key: Cell<u64>,
    listeners: RefCell<SmallVec<[Rc<Listener>; INLINE_LISTENERS]>>,
}

/// A broadcast-only change notifier.
///
/// `Event` is a shared handle: cloning it yields another handle to the same
/// listener list. Callbacks take no arguments; an event only says "changed".
///
/// # Dispatch rules
///
/// - [`raise`](Self::raise) calls listeners synchronously, in subscription order.
/// - A raise delivers to the listeners subscribed when it began. Listeners added
///   while it runs are not called until the next raise.
/// - A listener unsubscribed while a raise runs is not called for the rest of
///   that raise.
/// - Raising from inside a listener (re-entrancy) is allowed.
///
/// # Example
///
/// ```rust
/// use core::cell::Cell;
/// use std::rc::Rc;
/// use understory_notify::Event;
///
/// let event = Event::new();
/// let hits = Rc::new(Cell::new(0));
///
/// let counter = hits.clone();
/// let key = event.subscribe(move || counter.set(counter.get() + 1));
///
/// event.raise();
/// assert_eq!(hits.get(), 1);
///
/// assert!(event.unsubscribe(key));
/// event.raise();
/// assert_eq!(hits.get(), 1);
/// ```
#[derive(Clone)]
pub struct Event {
    inner: Rc<Inner>,
}

impl Event {
    /// Creates an event with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                next_key: Cell::new(0),
                listeners: RefCell::new(SmallVec::new()),
            }),
        }
    }

    /// Registers `callback` and returns the key that removes it again.
    pub fn subscribe<F>(&self, callback: F) -> ListenerKey
    where
        F: Fn() + 'static,
    {
        let key = ListenerKey(self.inner.next_key.get());
        self.inner.next_key.set(key.0 + 1);
        self.inner.listeners.borrow_mut().push(Rc::new(Listener {
            key,
            active: Cell::new(true),
            callback: Box::new(callback),
        }));
        log::trace!("event {:p}: subscribed {key:?}", Rc::as_ptr(&self.inner));
        key
    }

    /// Removes the listener registered under `key`.
    ///
    /// Returns `false` if `key` is not currently subscribed to this event.
    pub fn unsubscribe(&self, key: ListenerKey) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let Ok(index) = listeners.binary_search_by_key(&key, |listener| listener.key) else {
            return false;
        };
        let listener = listeners.remove(index);
        // Release the borrow before the callback's captures are dropped.
        drop(listeners);
        listener.active.set(false);
        log::trace!("event {:p}: unsubscribed {key:?}", Rc::as_ptr(&self.inner));
        true
    }

    /// Calls every subscribed listener, in subscription order.
    pub fn raise(&self) {
        // Snapshot so listeners can subscribe, unsubscribe, or raise again
        // without holding a borrow across the callbacks.
        let snapshot: SmallVec<[Rc<Listener>; INLINE_LISTENERS]> =
            self.inner.listeners.borrow().iter().cloned().collect();
        log::trace!(
            "event {:p}: raising to {} listener(s)",
            Rc::as_ptr(&self.inner),
            snapshot.len()
        );
        for listener in &snapshot {
            if listener.active.get() {
                (listener.callback)();
            }
        }
    }

    /// Returns the number of subscribed listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.listeners.borrow().is_empty()
    }

    /// Returns `true` if both handles refer to the same listener list.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Creates a handle that does not keep the listener list alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakEvent {
        WeakEvent {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("listeners", &self.listener_count())
            .field("next_key", &self.inner.next_key.get())
            .finish()
    }
}

/// A non-owning handle to an [`Event`].
///
/// Used when a listener on one event forwards to another: the forwarding
/// closure must not keep its target alive.
#[derive(Clone, Default)]
pub struct WeakEvent {
    inner: Weak<Inner>,
}

impl WeakEvent {
    /// Returns the event if any [`Event`] handle to it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Event> {
        self.inner.upgrade().map(|inner| Event { inner })
    }

    /// Raises the event if it is still alive.
    ///
    /// The upgraded handle is held until dispatch completes, so a listener that
    /// drops the last outside handle does not tear the event down mid-raise.
    /// Returns `false` if the event is gone.
    pub fn raise(&self) -> bool {
        match self.upgrade() {
            Some(event) => {
                event.raise();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for WeakEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakEvent")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}
