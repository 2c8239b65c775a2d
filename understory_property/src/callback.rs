// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`CallbackProperty`]: a node that computes its value from a closure.

use alloc::rc::Rc;
use core::any::Any;
use core::cell::{Cell, RefCell};
use core::fmt;

use understory_notify::Event;

use crate::node::{PropertyNode, downcast_node, same_node};
use crate::time::JulianDate;

/// Shared closure evaluated by a [`CallbackProperty`].
pub type PropertyCallback<V> = Rc<dyn Fn(JulianDate) -> V>;

/// A property whose value is produced by calling a closure with the query time.
///
/// Whether the node reports itself as constant is up to the creator: a
/// closure that ignores its time argument may be declared constant.
///
/// # Example
///
/// ```rust
/// use understory_property::{CallbackProperty, JulianDate, PropertyNode};
///
/// let start = JulianDate::J2000;
/// let elapsed = CallbackProperty::new(move |time: JulianDate| time.seconds_difference(start), false);
///
/// assert!(!elapsed.is_constant());
/// assert_eq!(elapsed.value(start.add_seconds(30.0)), 30.0);
/// ```
pub struct CallbackProperty<V> {
    callback: RefCell<PropertyCallback<V>>,
    is_constant: Cell<bool>,
    changed: Event,
}

impl<V: 'static> CallbackProperty<V> {
    /// Creates a property evaluating `callback`.
    #[must_use]
    pub fn new<F>(callback: F, is_constant: bool) -> Self
    where
        F: Fn(JulianDate) -> V + 'static,
    {
        Self::from_shared(Rc::new(callback), is_constant)
    }

    /// Creates a property evaluating an already shared callback.
    ///
    /// Two properties built from the same callback with the same constness
    /// compare equal.
    #[must_use]
    pub fn from_shared(callback: PropertyCallback<V>, is_constant: bool) -> Self {
        Self {
            callback: RefCell::new(callback),
            is_constant: Cell::new(is_constant),
            changed: Event::new(),
        }
    }

    /// Returns the current callback.
    #[must_use]
    pub fn callback(&self) -> PropertyCallback<V> {
        self.callback.borrow().clone()
    }

    /// Replaces the callback and its constness, then raises the change event.
    pub fn set_callback<F>(&self, callback: F, is_constant: bool)
    where
        F: Fn(JulianDate) -> V + 'static,
    {
        self.set_shared_callback(Rc::new(callback), is_constant);
    }

    /// Replaces the callback with an already shared one.
    ///
    /// Does nothing if both the callback and the constness are unchanged.
    pub fn set_shared_callback(&self, callback: PropertyCallback<V>, is_constant: bool) {
        let same_callback =
            core::ptr::addr_eq(Rc::as_ptr(&*self.callback.borrow()), Rc::as_ptr(&callback));
        if same_callback && self.is_constant.get() == is_constant {
            return;
        }
        *self.callback.borrow_mut() = callback;
        self.is_constant.set(is_constant);
        self.changed.raise();
    }
}

impl<V: 'static> PropertyNode<V> for CallbackProperty<V> {
    fn is_constant(&self) -> bool {
        self.is_constant.get()
    }

    fn definition_changed(&self) -> &Event {
        &self.changed
    }

    fn value(&self, time: JulianDate) -> V {
        // Clone out first: the closure may replace this node's callback.
        let callback = self.callback();
        callback(time)
    }

    fn equals(&self, other: &dyn PropertyNode<V>) -> bool {
        same_node(self, other)
            || downcast_node::<Self, V>(other).is_some_and(|other| {
                core::ptr::addr_eq(
                    Rc::as_ptr(&*self.callback.borrow()),
                    Rc::as_ptr(&*other.callback.borrow()),
                ) && self.is_constant.get() == other.is_constant.get()
            })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<V> fmt::Debug for CallbackProperty<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackProperty")
            .field("is_constant", &self.is_constant.get())
            .field("changed", &self.changed)
            .finish_non_exhaustive()
    }
}
