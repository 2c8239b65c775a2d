// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Material parameter bags.
//!
//! Like the sparse storage elsewhere in Understory, [`MaterialParameters`] is a
//! sorted `SmallVec` searched with binary search. Materials declare a handful
//! of uniforms, so the bag stays inline and resolving into a reused bag does
//! not allocate.

use peniko::Color;
use smallvec::SmallVec;

/// Inline capacity for parameter entries.
const INLINE_PARAMETERS: usize = 4;

/// A single material parameter value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MaterialValue {
    /// A color uniform.
    Color(Color),
    /// A scalar uniform, such as a width or power.
    Scalar(f64),
}

impl MaterialValue {
    /// Returns the color, if this is a color value.
    #[must_use]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            Self::Scalar(_) => None,
        }
    }

    /// Returns the scalar, if this is a scalar value.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Color(_) => None,
        }
    }
}

impl From<Color> for MaterialValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<f64> for MaterialValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

/// Named parameters produced by a material property for the renderer.
///
/// # Example
///
/// ```rust
/// use peniko::Color;
/// use understory_property::{MaterialParameters, MaterialValue};
///
/// let mut params = MaterialParameters::new();
/// params.set("color", Color::WHITE);
/// params.set("outlineWidth", 2.0);
///
/// assert_eq!(params.color("color"), Some(Color::WHITE));
/// assert_eq!(params.scalar("outlineWidth"), Some(2.0));
/// assert_eq!(params.get("missing"), None);
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialParameters {
    /// Entries sorted by name.
    entries: SmallVec<[(&'static str, MaterialValue); INLINE_PARAMETERS]>,
}

impl MaterialParameters {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn find(&self, name: &str) -> Result<usize, usize> {
        self.entries.binary_search_by(|(key, _)| (*key).cmp(name))
    }

    /// Sets `name` to `value`, returning the previous value.
    pub fn set(&mut self, name: &'static str, value: impl Into<MaterialValue>) -> Option<MaterialValue> {
        let value = value.into();
        match self.find(name) {
            Ok(index) => Some(core::mem::replace(&mut self.entries[index].1, value)),
            Err(index) => {
                self.entries.insert(index, (name, value));
                None
            }
        }
    }

    /// Returns the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<MaterialValue> {
        self.find(name).ok().map(|index| self.entries[index].1)
    }

    /// Returns the color stored under `name`, if it is a color.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<Color> {
        self.get(name).and_then(|value| value.as_color())
    }

    /// Returns the scalar stored under `name`, if it is a scalar.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|value| value.as_scalar())
    }

    /// Returns `true` if a value is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_ok()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, MaterialValue)> + '_ {
        self.entries.iter().copied()
    }

    /// Removes every parameter, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn set_replaces_existing() {
        let mut params = MaterialParameters::new();
        assert_eq!(params.set("color", Color::WHITE), None);
        assert_eq!(
            params.set("color", Color::BLACK),
            Some(MaterialValue::Color(Color::WHITE))
        );
        assert_eq!(params.len(), 1);
        assert_eq!(params.color("color"), Some(Color::BLACK));
    }

    #[test]
    fn iteration_is_name_ordered() {
        let mut params = MaterialParameters::new();
        params.set("outlineWidth", 1.0);
        params.set("color", Color::WHITE);
        params.set("outlineColor", Color::BLACK);

        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["color", "outlineColor", "outlineWidth"]);
    }

    #[test]
    fn typed_accessors_reject_mismatches() {
        let mut params = MaterialParameters::new();
        params.set("color", Color::WHITE);
        params.set("width", 3.0);

        assert_eq!(params.scalar("color"), None);
        assert_eq!(params.color("width"), None);
        assert!(params.contains("width"));
        assert!(!params.contains("height"));
    }

    #[test]
    fn clear_empties() {
        let mut params = MaterialParameters::new();
        params.set("width", 3.0);
        params.clear();
        assert!(params.is_empty());
        assert_eq!(params.get("width"), None);
    }
}
