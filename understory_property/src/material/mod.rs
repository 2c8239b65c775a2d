// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Material properties.
//!
//! A material property is a [`PropertyNode`] whose value is a
//! [`MaterialParameters`] bag: the named uniforms a renderer binds when
//! drawing with that material. Each material wraps one or more sub-properties
//! in [`PropertySlot`](crate::PropertySlot)s, forwards their change events as
//! its own, and resolves empty slots to fixed defaults.

mod arrow;
mod color;
mod outline;
mod params;

pub use arrow::{ARROW_MATERIAL_TYPE, ArrowMaterialProperty, DEFAULT_ARROW_COLOR};
pub use color::{COLOR_MATERIAL_TYPE, ColorMaterialProperty};
pub use outline::{DEFAULT_OUTLINE_WIDTH, OUTLINE_MATERIAL_TYPE, PolylineOutlineMaterialProperty};
pub use params::{MaterialParameters, MaterialValue};

use crate::node::PropertyNode;
use crate::time::JulianDate;

/// A property node that resolves to material parameters.
pub trait MaterialProperty: PropertyNode<MaterialParameters> {
    /// Returns the material type tag the renderer selects a shader by.
    ///
    /// Takes a time because a material may in principle switch type over
    /// time; the built-in materials never do.
    fn material_type(&self, time: JulianDate) -> &'static str;
}
