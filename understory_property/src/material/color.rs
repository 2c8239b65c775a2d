// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ColorMaterialProperty`]: a solid color fill.

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

/// Material type tag of [`ColorMaterialProperty`].
pub const COLOR_MATERIAL_TYPE: &str = "Color";

/// A material property that fills with a single color.
///
/// Same shape as [`ArrowMaterialProperty`](crate::ArrowMaterialProperty) with
/// a different type tag; an empty slot resolves to white.
pub struct ColorMaterialProperty {
    color: RefCell<PropertySlot<Color>>,
    changed: Event,
}

impl ColorMaterialProperty {
    /// Parameter name of the fill color.
    pub const COLOR: &'static str = "color";

    /// Creates a color material with an empty `color` slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: RefCell::new(PropertySlot::new(Self::COLOR)),
            changed: Event::new(),
        }
    }

    /// Creates a color material with `color` assigned.
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
    pub fn set_color(&self, color: impl IntoProperty<Color>) {
        let replaced = self
            .color
            .borrow_mut()
            .replace(color.into_property(), &self.changed);
        if replaced {
            self.changed.raise();
        }
    }
}

impl Default for ColorMaterialProperty {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyNode<MaterialParameters> for ColorMaterialProperty {
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
        let mut color = Color::WHITE;
        resolve::value_or_default(self.color().as_deref(), time, &Color::WHITE, &mut color);
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

impl MaterialProperty for ColorMaterialProperty {
    fn material_type(&self, _time: JulianDate) -> &'static str {
        COLOR_MATERIAL_TYPE
    }
}

impl fmt::Debug for ColorMaterialProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorMaterialProperty")
            .field("color", &self.color.borrow())
            .field("changed", &self.changed)
            .finish()
    }
}
