// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`PropertySlot`]: a named, reassignable reference to a sub-property.

use alloc::rc::Rc;
use core::fmt;

use understory_notify::{Event, ListenerKey};

use crate::node::PropertyNode;

/// One sub-property reference held by a composite property.
///
/// A slot owns at most one node and at most one subscription: the listener
/// it registered on that node's change event, which forwards into the owning
/// composite's event. [`replace`](Self::replace) keeps the two in step, and
/// dropping the slot unsubscribes.
///
/// The slot never raises the owner's event itself. Composites keep their slots
/// in a `RefCell`, and raising while the slot is mutably borrowed would hand
/// listeners a composite they cannot read.
pub struct PropertySlot<V> {
    name: &'static str,
    node: Option<Rc<dyn PropertyNode<V>>>,
    subscription: Option<ListenerKey>,
}

impl<V> PropertySlot<V> {
    /// Creates an empty slot.
    ///
    /// `name` identifies the slot in log output.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            node: None,
            subscription: None,
        }
    }

    /// Returns the slot's name.
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the node currently held, if any.
    #[must_use]
    #[inline]
    pub fn node(&self) -> Option<&Rc<dyn PropertyNode<V>>> {
        self.node.as_ref()
    }

    /// Returns a new handle to the node currently held, if any.
    #[must_use]
    pub fn get(&self) -> Option<Rc<dyn PropertyNode<V>>> {
        self.node.clone()
    }

    /// Returns `true` if the slot holds a node.
    #[must_use]
    #[inline]
    pub fn is_set(&self) -> bool {
        self.node.is_some()
    }

    /// Stores `node`, moving the forwarding subscription from the old node to
    /// the new one.
    ///
    /// Returns `false` without touching anything if `node` is the node already
    /// held (or both are empty). On `true` the caller must raise `owner`.
    pub fn replace(&mut self, node: Option<Rc<dyn PropertyNode<V>>>, owner: &Event) -> bool {
        let unchanged = match (&self.node, &node) {
            (None, None) => true,
            (Some(current), Some(new)) => core::ptr::addr_eq(Rc::as_ptr(current), Rc::as_ptr(new)),
            _ => false,
        };
        if unchanged {
            return false;
        }

        self.detach();
        self.node = node;
        if let Some(node) = &self.node {
            let target = owner.downgrade();
            self.subscription = Some(node.definition_changed().subscribe(move || {
                target.raise();
            }));
        }
        log::debug!(
            "slot `{}` replaced ({})",
            self.name,
            if self.node.is_some() { "set" } else { "cleared" }
        );
        true
    }

    fn detach(&mut self) {
        if let (Some(node), Some(key)) = (&self.node, self.subscription.take()) {
            let removed = node.definition_changed().unsubscribe(key);
            debug_assert!(removed, "slot `{}` lost its subscription", self.name);
        }
    }
}

impl<V> Drop for PropertySlot<V> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<V> fmt::Debug for PropertySlot<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySlot")
            .field("name", &self.name)
            .field("is_set", &self.is_set())
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
