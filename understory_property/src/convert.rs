// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of slot assignments into property nodes.

use alloc::rc::Rc;

use peniko::Color;

use crate::constant::ConstantProperty;
use crate::node::PropertyNode;

/// Anything that can be assigned to a property slot holding `V` values.
///
/// - Nodes (`Rc<P>` or `Rc<dyn PropertyNode<V>>`) are stored as they are.
/// - Plain values are wrapped in a new [`ConstantProperty`].
/// - `None` clears the slot.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use peniko::Color;
/// use understory_property::{ConstantProperty, IntoProperty, JulianDate, PropertyNode};
///
/// let wrapped = Color::BLACK.into_property().unwrap();
/// assert!(wrapped.is_constant());
/// assert_eq!(wrapped.value(JulianDate::J2000), Color::BLACK);
///
/// let node = Rc::new(ConstantProperty::new(Color::WHITE));
/// let stored = IntoProperty::<Color>::into_property(node.clone()).unwrap();
/// assert!(core::ptr::addr_eq(Rc::as_ptr(&stored), Rc::as_ptr(&node)));
///
/// assert!(IntoProperty::<Color>::into_property(None::<Color>).is_none());
/// ```
pub trait IntoProperty<V> {
    /// Converts `self` into slot contents.
    fn into_property(self) -> Option<Rc<dyn PropertyNode<V>>>;
}

impl<V, P> IntoProperty<V> for Rc<P>
where
    P: PropertyNode<V> + 'static,
{
    fn into_property(self) -> Option<Rc<dyn PropertyNode<V>>> {
        Some(self)
    }
}

impl<V> IntoProperty<V> for Rc<dyn PropertyNode<V>> {
    fn into_property(self) -> Option<Rc<dyn PropertyNode<V>>> {
        Some(self)
    }
}

impl<V, T> IntoProperty<V> for Option<T>
where
    T: IntoProperty<V>,
{
    fn into_property(self) -> Option<Rc<dyn PropertyNode<V>>> {
        self.and_then(IntoProperty::into_property)
    }
}

macro_rules! impl_into_constant {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoProperty<$ty> for $ty {
                fn into_property(self) -> Option<Rc<dyn PropertyNode<$ty>>> {
                    Some(Rc::new(ConstantProperty::new(self)))
                }
            }
        )*
    };
}

impl_into_constant!(Color, f64, f32, bool);
