// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ConstantProperty`]: a node whose value does not vary with time.

use core::any::Any;
use core::cell::RefCell;
use core::fmt;

use understory_notify::Event;

use crate::node::{PropertyNode, downcast_node, same_node};
use crate::time::JulianDate;

/// A property whose value is the same at every time.
///
/// The value can still be replaced with [`set_value`](Self::set_value), which
/// raises [`definition_changed`](PropertyNode::definition_changed) when the
/// new value differs from the old one.
///
/// # Example
///
/// ```rust
/// use understory_property::{ConstantProperty, JulianDate, PropertyNode};
///
/// let width = ConstantProperty::new(2.5_f64);
/// assert!(width.is_constant());
/// assert_eq!(width.value(JulianDate::J2000), 2.5);
///
/// width.set_value(4.0);
/// assert_eq!(width.get(), 4.0);
/// ```
pub struct ConstantProperty<V> {
    value: RefCell<V>,
    changed: Event,
}

impl<V: Clone + PartialEq + 'static> ConstantProperty<V> {
    /// Creates a property holding `value`.
    #[must_use]
    pub fn new(value: V) -> Self {
        Self {
            value: RefCell::new(value),
            changed: Event::new(),
        }
    }

    /// Returns a copy of the held value.
    #[must_use]
    pub fn get(&self) -> V {
        self.value.borrow().clone()
    }

    /// Replaces the held value.
    ///
    /// Raises the change event only if `value` differs from the current one.
    pub fn set_value(&self, value: V) {
        let changed = {
            let mut current = self.value.borrow_mut();
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        };
        if changed {
            self.changed.raise();
        }
    }
}

impl<V: Clone + PartialEq + 'static> PropertyNode<V> for ConstantProperty<V> {
    fn is_constant(&self) -> bool {
        true
    }

    fn definition_changed(&self) -> &Event {
        &self.changed
    }

    fn value(&self, _time: JulianDate) -> V {
        self.get()
    }

    fn value_into(&self, _time: JulianDate, result: &mut V) {
        result.clone_from(&self.value.borrow());
    }

    fn equals(&self, other: &dyn PropertyNode<V>) -> bool {
        same_node(self, other)
            || downcast_node::<Self, V>(other)
                .is_some_and(|other| *self.value.borrow() == *other.value.borrow())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<V: fmt::Debug> fmt::Debug for ConstantProperty<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstantProperty")
            .field("value", &self.value.borrow())
            .field("changed", &self.changed)
            .finish()
    }
}
