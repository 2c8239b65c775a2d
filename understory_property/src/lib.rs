// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Property: time-varying property nodes with change notification.
//!
//! A property is a value source that can be queried at any [`JulianDate`].
//! Properties are composable: a material property wraps a color property,
//! which may itself be constant or computed. Every node exposes an
//! [`Event`](understory_notify::Event) that fires when its definition changes,
//! and composites forward their sub-properties' events as their own.
//!
//! ## Core Concepts
//!
//! ### Nodes
//!
//! [`PropertyNode<V>`] is the capability every property implements:
//!
//! - `is_constant()` - whether the value ignores time
//! - `value(time)` / `value_into(time, &mut result)` - evaluate
//! - `equals(other)` - structural equality against another node
//! - `definition_changed()` - the change event
//!
//! Leaf nodes are [`ConstantProperty`] and [`CallbackProperty`].
//!
//! ### Slots
//!
//! A composite holds each sub-property in a [`PropertySlot`]. Replacing the
//! node in a slot moves the forwarding subscription from the old node to the
//! new one; dropping the slot unsubscribes. Plain values assigned to a slot
//! are wrapped in a [`ConstantProperty`] through [`IntoProperty`].
//!
//! ### Resolution
//!
//! The [`resolve`] module defines how an empty slot behaves: constant, equal
//! only to another empty slot, and resolving to the composite's default.
//!
//! ## Quick Start
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use peniko::Color;
//! use understory_property::{
//!     ArrowMaterialProperty, ConstantProperty, JulianDate, MaterialProperty, PropertyNode,
//! };
//!
//! let color = Rc::new(ConstantProperty::new(Color::WHITE));
//! let arrow = ArrowMaterialProperty::with_color(color.clone());
//!
//! let changes = Rc::new(Cell::new(0));
//! let counter = changes.clone();
//! arrow.definition_changed().subscribe(move || counter.set(counter.get() + 1));
//!
//! // Edits to the wrapped color surface on the arrow.
//! color.set_value(Color::BLACK);
//! assert_eq!(changes.get(), 1);
//!
//! let params = arrow.value(JulianDate::J2000);
//! assert_eq!(arrow.material_type(JulianDate::J2000), "PolylineArrow");
//! assert_eq!(params.color(ArrowMaterialProperty::COLOR), Some(Color::BLACK));
//! ```
//!
//! ## Materials
//!
//! | Material | Type tag | Parameters |
//! |----------|----------|------------|
//! | [`ArrowMaterialProperty`] | `PolylineArrow` | `color` |
//! | [`ColorMaterialProperty`] | `Color` | `color` |
//! | [`PolylineOutlineMaterialProperty`] | `PolylineOutline` | `color`, `outlineColor`, `outlineWidth` |
//!
//! ## Threading
//!
//! Nodes use `Rc` and interior mutability and are neither `Send` nor `Sync`.
//! Build and query a property graph on one thread.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. The `std` feature (enabled by
//! default) is forwarded to `peniko`; use `libm` instead for `no_std` targets.

#![no_std]

extern crate alloc;

mod callback;
mod constant;
mod convert;
mod material;
mod node;
pub mod resolve;
mod slot;
mod time;

pub use callback::{CallbackProperty, PropertyCallback};
pub use constant::ConstantProperty;
pub use convert::IntoProperty;
pub use material::{
    ARROW_MATERIAL_TYPE, ArrowMaterialProperty, COLOR_MATERIAL_TYPE, ColorMaterialProperty,
    DEFAULT_ARROW_COLOR, DEFAULT_OUTLINE_WIDTH, MaterialParameters, MaterialProperty,
    MaterialValue, OUTLINE_MATERIAL_TYPE, PolylineOutlineMaterialProperty,
};
pub use node::{PropertyNode, downcast_node, same_node};
pub use slot::PropertySlot;
pub use time::{JulianDate, SECONDS_PER_DAY};
