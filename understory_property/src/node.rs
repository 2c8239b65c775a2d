// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`PropertyNode`] capability trait.

use core::any::Any;

use understory_notify::Event;

use crate::time::JulianDate;

/// A value source that can be queried at any [`JulianDate`].
///
/// Every time-varying property implements this trait, whether it holds a
/// constant, computes its value from a callback, or combines other nodes.
/// Consumers hold nodes as `Rc<dyn PropertyNode<V>>` and never need to know
/// which kind they have.
///
/// # Contract
///
/// - [`is_constant`](Self::is_constant) is derived on every call. A composite's
///   answer changes when its sub-properties are replaced.
/// - [`value`](Self::value) and [`value_into`](Self::value_into) must agree.
/// - [`equals`](Self::equals) is structural and must return `true` for the
///   node itself without inspecting any fields.
/// - [`definition_changed`](Self::definition_changed) is raised exactly once
///   per logical change, after the node's state has been updated.
pub trait PropertyNode<V> {
    /// Returns `true` if the value is the same for every time, for as long as
    /// the current definition holds.
    fn is_constant(&self) -> bool;

    /// The event raised whenever a query for some time would now return a
    /// different value.
    fn definition_changed(&self) -> &Event;

    /// Returns the value at `time`.
    fn value(&self, time: JulianDate) -> V;

    /// Writes the value at `time` into `result`.
    ///
    /// Nodes whose values own allocations override this to reuse the storage
    /// already held by `result`.
    fn value_into(&self, time: JulianDate, result: &mut V) {
        *result = self.value(time);
    }

    /// Returns `true` if `other` is the same kind of node with an equal
    /// definition.
    fn equals(&self, other: &dyn PropertyNode<V>) -> bool;

    /// Returns `self` as [`Any`] so [`equals`](Self::equals) can downcast.
    fn as_any(&self) -> &dyn Any;
}

/// Returns `true` if both references point at the same node.
#[must_use]
#[inline]
pub fn same_node<V>(left: &dyn PropertyNode<V>, right: &dyn PropertyNode<V>) -> bool {
    core::ptr::addr_eq(left, right)
}

/// Downcasts `node` to the concrete node type `P`.
#[must_use]
#[inline]
pub fn downcast_node<P: 'static, V>(node: &dyn PropertyNode<V>) -> Option<&P> {
    node.as_any().downcast_ref::<P>()
}
