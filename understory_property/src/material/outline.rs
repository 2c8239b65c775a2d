// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`PolylineOutlineMaterialProperty`]: a polyline with a colored outline.

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

/// Material type tag of [`PolylineOutlineMaterialProperty`].
pub const OUTLINE_MATERIAL_TYPE: &str = "PolylineOutline";

/// Outline width, in pixels, used while the `outline_width` slot is empty.
pub const DEFAULT_OUTLINE_WIDTH: f64 = 1.0;

/// A material property for polylines drawn with an outline.
///
/// Three independent slots, each with its own default:
///
/// | Slot | Parameter | Default |
/// |------|-----------|---------|
/// | `color` | `color` | white |
/// | `outline_color` | `outlineColor` | black |
/// | `outline_width` | `outlineWidth` | [`DEFAULT_OUTLINE_WIDTH`] |
///
/// The material is constant only while all three slots are.
pub struct PolylineOutlineMaterialProperty {
    color: RefCell<PropertySlot<Color>>,
    outline_color: RefCell<PropertySlot<Color>>,
    outline_width: RefCell<PropertySlot<f64>>,
    changed: Event,
}

impl PolylineOutlineMaterialProperty {
    /// Parameter name of the line color.
    pub const COLOR: &'static str = "color";
    /// Parameter name of the outline color.
    pub const OUTLINE_COLOR: &'static str = "outlineColor";
    /// Parameter name of the outline width.
    pub const OUTLINE_WIDTH: &'static str = "outlineWidth";

    /// Creates an outline material with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: RefCell::new(PropertySlot::new(Self::COLOR)),
            outline_color: RefCell::new(PropertySlot::new(Self::OUTLINE_COLOR)),
            outline_width: RefCell::new(PropertySlot::new(Self::OUTLINE_WIDTH)),
            changed: Event::new(),
        }
    }

    /// Creates an outline material with all three slots assigned.
    #[must_use]
    pub fn with_properties(
        color: impl IntoProperty<Color>,
        outline_color: impl IntoProperty<Color>,
        outline_width: impl IntoProperty<f64>,
    ) -> Self {
        let material = Self::new();
        material.set_color(color);
        material.set_outline_color(outline_color);
        material.set_outline_width(outline_width);
        material
    }

    /// Returns the line color property, if one is assigned.
    #[must_use]
    pub fn color(&self) -> Option<Rc<dyn PropertyNode<Color>>> {
        self.color.borrow().get()
    }

    /// Returns the outline color property, if one is assigned.
    #[must_use]
    pub fn outline_color(&self) -> Option<Rc<dyn PropertyNode<Color>>> {
        self.outline_color.borrow().get()
    }

    /// Returns the outline width property, if one is assigned.
    #[must_use]
    pub fn outline_width(&self) -> Option<Rc<dyn PropertyNode<f64>>> {
        self.outline_width.borrow().get()
    }

    /// Assigns the line color property.
    pub fn set_color(&self, color: impl IntoProperty<Color>) {
        self.assign(&self.color, color.into_property());
    }

    /// Assigns the outline color property.
    pub fn set_outline_color(&self, outline_color: impl IntoProperty<Color>) {
        self.assign(&self.outline_color, outline_color.into_property());
    }

    /// Assigns the outline width property.
    pub fn set_outline_width(&self, outline_width: impl IntoProperty<f64>) {
        self.assign(&self.outline_width, outline_width.into_property());
    }

    fn assign<V>(&self, slot: &RefCell<PropertySlot<V>>, node: Option<Rc<dyn PropertyNode<V>>>) {
        let replaced = slot.borrow_mut().replace(node, &self.changed);
        if replaced {
            self.changed.raise();
        }
    }
}

impl Default for PolylineOutlineMaterialProperty {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyNode<MaterialParameters> for PolylineOutlineMaterialProperty {
    fn is_constant(&self) -> bool {
        resolve::is_constant(self.color().as_deref())
            && resolve::is_constant(self.outline_color().as_deref())
            && resolve::is_constant(self.outline_width().as_deref())
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

        let mut outline_color = Color::BLACK;
        resolve::value_or_default(
            self.outline_color().as_deref(),
            time,
            &Color::BLACK,
            &mut outline_color,
        );
        result.set(Self::OUTLINE_COLOR, outline_color);

        let mut outline_width = DEFAULT_OUTLINE_WIDTH;
        resolve::value_or_default(
            self.outline_width().as_deref(),
            time,
            &DEFAULT_OUTLINE_WIDTH,
            &mut outline_width,
        );
        result.set(Self::OUTLINE_WIDTH, outline_width);
    }

    fn equals(&self, other: &dyn PropertyNode<MaterialParameters>) -> bool {
        same_node(self, other)
            || downcast_node::<Self, _>(other).is_some_and(|other| {
                resolve::equals(self.color().as_deref(), other.color().as_deref())
                    && resolve::equals(
                        self.outline_color().as_deref(),
                        other.outline_color().as_deref(),
                    )
                    && resolve::equals(
                        self.outline_width().as_deref(),
                        other.outline_width().as_deref(),
                    )
            })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl MaterialProperty for PolylineOutlineMaterialProperty {
    fn material_type(&self, _time: JulianDate) -> &'static str {
        OUTLINE_MATERIAL_TYPE
    }
}

impl fmt::Debug for PolylineOutlineMaterialProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolylineOutlineMaterialProperty")
            .field("color", &self.color.borrow())
            .field("outline_color", &self.outline_color.borrow())
            .field("outline_width", &self.outline_width.borrow())
            .field("changed", &self.changed)
            .finish()
    }
}
