// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ArrowMaterialProperty`]: the polyline arrow material.

use alloc::rc::Rc;
use core::any::Any;
use core::cell::RefCell;
use core::fmt;

use peniko::Color;
use understory_notify::Event;

use crate::convert::IntoProperty;
use crate::material::{MaterialParameters, MaterialProperty};
use crate::node::{PropertyNode, downcast_node, same_node};
use crate::resolve;
use crate::slot::PropertySlot;
use crate::time::JulianDate;

/// Material type tag of [`ArrowMaterialProperty`].
pub const ARROW_MATERIAL_TYPE: &str = "PolylineArrow";

/// Color used while the `color` slot is empty.
pub const DEFAULT_ARROW_COLOR: Color = Color::WHITE;

/// A material property that draws a polyline as an arrow.
///
/// Wraps one color sub-property and maps it to the `color` uniform. Changes to
/// the wrapped property, and replacing it, raise this property's
/// [`definition_changed`](PropertyNode::definition_changed) event.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use peniko::Color;
/// use understory_property::{
///     ArrowMaterialProperty, CallbackProperty, JulianDate, MaterialProperty, PropertyNode,
/// };
///
/// let arrow = ArrowMaterialProperty::new();
/// let time = JulianDate::J2000;
/// assert_eq!(arrow.material_type(time), "PolylineArrow");
/// assert_eq!(arrow.value(time).color(ArrowMaterialProperty::COLOR), Some(Color::WHITE));
///
/// // Literal colors are wrapped in constant nodes.
/// let red = Color::from_rgba8(255, 0, 0, 255);
/// arrow.set_color(red);
/// assert!(arrow.is_constant());
/// assert_eq!(arrow.value(time).color(ArrowMaterialProperty::COLOR), Some(red));
///
/// // Time-varying colors make the whole material time-varying.
/// arrow.set_color(Rc::new(CallbackProperty::new(move |_| red, false)));
/// assert!(!arrow.is_constant());
/// ```
pub struct ArrowMaterialProperty {
    color: RefCell<PropertySlot<Color>>,
    changed: Event,
}

impl ArrowMaterialProperty {
    /// Parameter name of the arrow color.
    pub const COLOR: &'static str = "color";

    /// Creates an arrow material with an empty `color` slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: RefCell::new(PropertySlot::new(Self::COLOR)),
            changed: Event::new(),
        }
    }

    /// Creates an arrow material with `color` assigned.
    #[must_use]
    pub fn with_color(color: impl IntoProperty<Color>) -> Self {
        let material = Self::new();
        material.set_color(color);
        material
    }

    /// Returns the color property, if one is assigned.
    #[must_use]
    pub fn color(&self) -> Option<Rc<dyn PropertyNode<Color>>> {
        self.color.borrow().get()
    }

    /// Assigns the color property.
    ///
    /// Raises [`definition_changed`](PropertyNode::definition_changed) once,
    /// unless `color` is the node already assigned.
    pub fn set_color(&self, color: impl IntoProperty<Color>) {
        let replaced = self
            .color
            .borrow_mut()
            .replace(color.into_property(), &self.changed);
        if replaced {
            self.changed.raise();
        }
    }

    /// Empties the color slot, reverting to [`DEFAULT_ARROW_COLOR`].
    pub fn clear_color(&self) {
        self.set_color(None::<Color>);
    }
}

impl Default for ArrowMaterialProperty {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyNode<MaterialParameters> for ArrowMaterialProperty {
    fn is_constant(&self) -> bool {
        resolve::is_constant(self.color().as_deref())
    }

    fn definition_changed(&self) -> &Event {
        &self.changed
    }

    fn value(&self, time: JulianDate) -> MaterialParameters {
        let mut result = MaterialParameters::new();
        self.value_into(time, &mut result);
        result
    }

    fn value_into(&self, time: JulianDate, result: &mut MaterialParameters) {
        let mut color = DEFAULT_ARROW_COLOR;
        resolve::value_or_default(
            self.color().as_deref(),
            time,
            &DEFAULT_ARROW_COLOR,
            &mut color,
        );
        result.set(Self::COLOR, color);
    }

    fn equals(&self, other: &dyn PropertyNode<MaterialParameters>) -> bool {
        same_node(self, other)
            || downcast_node::<Self, _>(other).is_some_and(|other| {
                resolve::equals(self.color().as_deref(), other.color().as_deref())
            })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl MaterialProperty for ArrowMaterialProperty {
    fn material_type(&self, _time: JulianDate) -> &'static str {
        ARROW_MATERIAL_TYPE
    }
}

impl fmt::Debug for ArrowMaterialProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrowMaterialProperty")
            .field("color", &self.color.borrow())
            .field("changed", &self.changed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::CallbackProperty;
    use crate::constant::ConstantProperty;
    use core::cell::Cell;

    fn red() -> Color {
        Color::from_rgba8(255, 0, 0, 255)
    }

    fn count(event: &Event) -> Rc<Cell<u32>> {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        event.subscribe(move || counter.set(counter.get() + 1));
        hits
    }

    #[test]
    fn empty_slot_resolves_to_white() {
        let arrow = ArrowMaterialProperty::new();
        assert!(arrow.color().is_none());
        assert!(arrow.is_constant());
        assert_eq!(arrow.material_type(JulianDate::J2000), ARROW_MATERIAL_TYPE);

        let params = arrow.value(JulianDate::J2000);
        assert_eq!(params.color(ArrowMaterialProperty::COLOR), Some(Color::WHITE));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn value_into_overwrites_stale_color() {
        let arrow = ArrowMaterialProperty::with_color(red());
        let mut params = MaterialParameters::new();
        params.set(ArrowMaterialProperty::COLOR, Color::BLACK);

        arrow.value_into(JulianDate::J2000, &mut params);
        assert_eq!(params.color(ArrowMaterialProperty::COLOR), Some(red()));

        arrow.clear_color();
        arrow.value_into(JulianDate::J2000, &mut params);
        assert_eq!(params.color(ArrowMaterialProperty::COLOR), Some(Color::WHITE));
    }

    #[test]
    fn replacement_raises_once_and_identity_is_silent() {
        let arrow = ArrowMaterialProperty::new();
        let hits = count(arrow.definition_changed());

        let node: Rc<dyn PropertyNode<Color>> = Rc::new(ConstantProperty::new(red()));
        arrow.set_color(node.clone());
        assert_eq!(hits.get(), 1);

        arrow.set_color(node.clone());
        assert_eq!(hits.get(), 1);

        arrow.clear_color();
        assert_eq!(hits.get(), 2);
        arrow.clear_color();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn upstream_changes_are_forwarded() {
        let node = Rc::new(ConstantProperty::new(red()));
        let arrow = ArrowMaterialProperty::with_color(node.clone());
        let hits = count(arrow.definition_changed());

        node.set_value(Color::BLACK);
        assert_eq!(hits.get(), 1);
        assert_eq!(
            arrow.value(JulianDate::J2000).color(ArrowMaterialProperty::COLOR),
            Some(Color::BLACK)
        );
    }

    #[test]
    fn constness_follows_slot() {
        let arrow = ArrowMaterialProperty::new();
        arrow.set_color(Rc::new(CallbackProperty::new(|_| red(), false)));
        assert!(!arrow.is_constant());

        arrow.set_color(red());
        assert!(arrow.is_constant());
    }

    #[test]
    fn equality_is_slot_wise() {
        let a = ArrowMaterialProperty::new();
        let b = ArrowMaterialProperty::new();
        assert!(a.equals(&a));
        assert!(a.equals(&b));

        a.set_color(red());
        assert!(!a.equals(&b));
        assert!(!b.equals(&a));

        b.set_color(red());
        assert!(a.equals(&b));
    }

    #[test]
    fn drop_unsubscribes_from_shared_node() {
        let shared = Rc::new(ConstantProperty::new(red()));
        let a = ArrowMaterialProperty::with_color(shared.clone());
        let b = ArrowMaterialProperty::with_color(shared.clone());
        assert_eq!(shared.definition_changed().listener_count(), 2);

        drop(a);
        assert_eq!(shared.definition_changed().listener_count(), 1);
        drop(b);
        assert!(shared.definition_changed().is_empty());
    }
}
