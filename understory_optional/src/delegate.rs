// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field-binding adapters.
//!
//! A delegate property is a container used as the backing store for a named
//! field of some owning object. The owner holds one container per field and
//! routes reads and writes through [`DelegateProperty::get_value`] and
//! [`MutableDelegateProperty::set_value`], passing an owner identity (a
//! reference to the owner, or a key for it when the owner is mutably
//! borrowed) and a [`Field`] descriptor along. Neither is interpreted by the
//! container; the field only shows up in the [`NoSuchValue`] of a failed read.
//!
//! The read type `A` depends on the capability:
//!
//! - Plain delegates read `Option<T>`: an unset field reads as `None`.
//! - Defaultable delegates read `Result<T, NoSuchValue>`: the default covers
//!   an unset field, and only a field with neither slot set fails.
//!
//! # Example
//!
//! ```rust
//! use understory_optional::{
//!     DelegateProperty, Field, MutableDelegateProperty, StoredDefaultableProperty,
//!     StoredProperty,
//! };
//!
//! struct Label {
//!     id: u32,
//!     text: StoredProperty<&'static str>,
//!     size: StoredDefaultableProperty<f32>,
//! }
//!
//! impl Label {
//!     const TEXT: Field = Field::new("Label", "text");
//!     const SIZE: Field = Field::new("Label", "size");
//!
//!     fn text(&self) -> Option<&'static str> {
//!         self.text.get_value(&self.id, &Self::TEXT)
//!     }
//!
//!     fn set_text(&mut self, text: &'static str) {
//!         self.text.set_value(&self.id, &Self::TEXT, text);
//!     }
//!
//!     fn size(&self) -> f32 {
//!         self.size.get_value(&self.id, &Self::SIZE).unwrap_or(0.0)
//!     }
//! }
//!
//! let mut label = Label {
//!     id: 7,
//!     text: StoredProperty::new(),
//!     size: StoredDefaultableProperty::with_default(12.0),
//! };
//! assert_eq!(label.text(), None);
//! label.set_text("hi");
//! assert_eq!(label.text(), Some("hi"));
//! assert_eq!(label.size(), 12.0);
//! ```

use core::fmt;

use crate::error::NoSuchValue;
use crate::property::{DefaultableProperty, MutableProperty, Property};

/// Identifies the field a delegate-bound container backs.
///
/// A field is named by its owner's type name and its own name. Both are
/// opaque to the containers.
///
/// # Example
///
/// ```rust
/// use understory_optional::Field;
///
/// struct Button;
///
/// let field = Field::of::<Button>("label");
/// assert_eq!(field.name(), "label");
/// assert!(field.owner().ends_with("Button"));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    owner: &'static str,
    name: &'static str,
}

impl Field {
    /// Creates a field descriptor from an owner name and a field name.
    #[must_use]
    #[inline]
    pub const fn new(owner: &'static str, name: &'static str) -> Self {
        Self { owner, name }
    }

    /// Creates a field descriptor whose owner is the type name of `O`.
    #[must_use]
    #[inline]
    pub fn of<O: ?Sized>(name: &'static str) -> Self {
        Self::new(core::any::type_name::<O>(), name)
    }

    /// Returns the owner name.
    #[must_use]
    #[inline]
    pub const fn owner(&self) -> &'static str {
        self.owner
    }

    /// Returns the field name.
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

/// A [`Property`] usable as the read side of a field.
///
/// `A` is the type the field reads as; see the [module docs](self).
pub trait DelegateProperty<T, A>: Property<T> {
    /// Reads the field backed by this container.
    ///
    /// `owner` and `field` identify the access and are not interpreted.
    fn get_value<O: ?Sized>(&self, owner: &O, field: &Field) -> A;
}

/// A [`MutableProperty`] usable as the read and write side of a field.
///
/// Implemented for every type that is both a `MutableProperty<T>` and a
/// `DelegateProperty<T, A>`.
pub trait MutableDelegateProperty<T, A>: MutableProperty<T> + DelegateProperty<T, A> {
    /// Writes the field backed by this container.
    ///
    /// This is [`MutableProperty::set`]; `owner` and `field` are not
    /// interpreted.
    #[inline]
    fn set_value<O: ?Sized>(&mut self, _owner: &O, _field: &Field, value: T) {
        self.set(value);
    }
}

impl<T, A, P> MutableDelegateProperty<T, A> for P where
    P: MutableProperty<T> + DelegateProperty<T, A> + ?Sized
{
}

/// A [`DefaultableProperty`] whose field reads fall back to the default.
///
/// Reads return the held value, else the default value, else the
/// [`NoSuchValue`] produced by [`DefaultableProperty::get_or_default`] with
/// the field attached.
pub trait DefaultableDelegateProperty<T>:
    DefaultableProperty<T> + DelegateProperty<T, Result<T, NoSuchValue>>
{
}

impl<T, P> DefaultableDelegateProperty<T> for P where
    P: DefaultableProperty<T> + DelegateProperty<T, Result<T, NoSuchValue>> + ?Sized
{
}

/// A [`DefaultableDelegateProperty`] whose field is also writable.
pub trait MutableDefaultableDelegateProperty<T>:
    DefaultableDelegateProperty<T> + MutableDelegateProperty<T, Result<T, NoSuchValue>>
{
}

impl<T, P> MutableDefaultableDelegateProperty<T> for P where
    P: DefaultableDelegateProperty<T> + MutableDelegateProperty<T, Result<T, NoSuchValue>> + ?Sized
{
}

/// Reads a plain delegate field: the held value, if any.
#[inline]
pub(crate) fn read_optional<T: Clone, P: Property<T> + ?Sized>(property: &P) -> Option<T> {
    property.get().ok().cloned()
}

/// Reads a defaultable delegate field, tagging a failure with `field`.
#[inline]
pub(crate) fn read_defaulted<T: Clone, P: DefaultableProperty<T> + ?Sized>(
    property: &P,
    field: &Field,
) -> Result<T, NoSuchValue> {
    property
        .get_or_default()
        .cloned()
        .map_err(|err| err.with_field(*field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    struct Owner;

    #[test]
    fn field_accessors() {
        let field = Field::new("Owner", "width");
        assert_eq!(field.owner(), "Owner");
        assert_eq!(field.name(), "width");
        assert_eq!(field.to_string(), "Owner.width");
    }

    #[test]
    fn field_of_uses_type_name() {
        let field = Field::of::<Owner>("width");
        assert_eq!(field.owner(), core::any::type_name::<Owner>());
        assert_ne!(field, Field::of::<Owner>("height"));
    }

    #[test]
    fn field_debug() {
        let debug = format!("{:?}", Field::new("Owner", "width"));
        assert!(debug.contains("Field"));
        assert!(debug.contains("width"));
    }

    #[test]
    fn read_helpers() {
        let field = Field::new("Owner", "width");
        assert_eq!(read_optional(&Some(3)), Some(3));
        assert_eq!(read_optional::<i32, _>(&None), None);

        let err = read_defaulted(
            &crate::StoredDefaultableProperty::<i32>::new(),
            &field,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some(field));
        assert_eq!(err.message(), NoSuchValue::new().message());
    }
}
