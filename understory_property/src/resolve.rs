// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value resolution over optional slots.
//!
//! Composite properties hold sub-properties that may be absent. These
//! functions define what an absent slot means:
//!
//! - it is constant,
//! - it equals another absent slot and nothing else,
//! - it resolves to the composite's documented default.

use crate::node::{PropertyNode, same_node};
use crate::time::JulianDate;

/// Returns `true` if `node` is absent or constant.
#[must_use]
pub fn is_constant<V>(node: Option<&dyn PropertyNode<V>>) -> bool {
    node.is_none_or(|node| node.is_constant())
}

/// Compares two optional nodes.
///
/// Absent equals absent; absent never equals present; the same node always
/// equals itself; otherwise [`PropertyNode::equals`] decides.
#[must_use]
pub fn equals<V>(left: Option<&dyn PropertyNode<V>>, right: Option<&dyn PropertyNode<V>>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => same_node(left, right) || left.equals(right),
        _ => false,
    }
}

/// Writes the value of `node` at `time` into `result`, or a copy of `default`
/// if the slot is empty.
///
/// A constant node is read by value so `result` never aliases state the node
/// keeps; other nodes fill `result` themselves through
/// [`PropertyNode::value_into`].
pub fn value_or_default<V: Clone>(
    node: Option<&dyn PropertyNode<V>>,
    time: JulianDate,
    default: &V,
    result: &mut V,
) {
    match node {
        None => result.clone_from(default),
        Some(node) if node.is_constant() => *result = node.value(time),
        Some(node) => node.value_into(time, result),
    }
}

/// Returns the value of `node` at `time`, or a copy of `default`.
#[must_use]
pub fn value_or_clone_default<V: Clone>(
    node: Option<&dyn PropertyNode<V>>,
    time: JulianDate,
    default: &V,
) -> V {
    match node {
        Some(node) => node.value(time),
        None => default.clone(),
    }
}

/// Returns the value of `node` at `time`, or `None` if the slot is empty.
#[must_use]
pub fn value_or_none<V>(node: Option<&dyn PropertyNode<V>>, time: JulianDate) -> Option<V> {
    node.map(|node| node.value(time))
}
