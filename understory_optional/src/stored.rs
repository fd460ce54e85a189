// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concrete mutable containers.
//!
//! [`StoredProperty`] owns a single optional value. [`StoredDefaultableProperty`]
//! owns two: the value itself and an independent default that reads fall back
//! to. Both can back a field through the [`delegate`](crate::delegate) traits.

use crate::delegate::{DelegateProperty, Field, read_defaulted, read_optional};
use crate::error::NoSuchValue;
use crate::property::{DefaultableProperty, MutableDefaultableProperty, MutableProperty, Property};

/// A mutable container holding zero or one value.
///
/// # Example
///
/// ```rust
/// use understory_optional::{MutableProperty, Property, PropertyExt, StoredProperty};
///
/// let mut prop = StoredProperty::<i32>::new();
/// assert!(!prop.is_set());
///
/// prop.set(5);
/// assert_eq!(prop.get(), Ok(&5));
/// assert_eq!(prop.get_or(0), 5);
///
/// prop.unset();
/// assert_eq!(prop.get_or(0), 0);
/// assert!(prop.get().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoredProperty<T> {
    value: Option<T>,
}

impl<T> StoredProperty<T> {
    /// Creates an empty container.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Creates a container holding `value`.
    #[must_use]
    #[inline]
    pub const fn with_value(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Sets `value`, returning the previously held value.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Moves the held value out, leaving the container empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Returns the held value as an `Option`.
    #[must_use]
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Converts into the held value.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for StoredProperty<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Option<T>> for StoredProperty<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> Property<T> for StoredProperty<T> {
    #[inline]
    fn is_set(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    fn get(&self) -> Result<&T, NoSuchValue> {
        self.value.as_ref().ok_or(NoSuchValue::new())
    }
}

impl<T> MutableProperty<T> for StoredProperty<T> {
    #[inline]
    fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    #[inline]
    fn unset(&mut self) {
        self.value = None;
    }
}

impl<T: Clone> DelegateProperty<T, Option<T>> for StoredProperty<T> {
    #[inline]
    fn get_value<O: ?Sized>(&self, _owner: &O, _field: &Field) -> Option<T> {
        read_optional(self)
    }
}

/// A mutable container with a value slot and an independent default slot.
///
/// Reads through [`DefaultableProperty::get_or_default`] prefer the value and
/// fall back to the default. Writing or clearing either slot leaves the other
/// untouched.
///
/// # Example
///
/// ```rust
/// use understory_optional::{
///     DefaultableProperty, MutableDefaultableProperty, MutableProperty, Property,
///     StoredDefaultableProperty,
/// };
///
/// let mut prop = StoredDefaultableProperty::with_default(10);
/// assert!(!prop.is_set());
/// assert!(prop.has_default());
/// assert_eq!(prop.get_or_default(), Ok(&10));
///
/// prop.set(3);
/// prop.unset_default();
/// assert_eq!(prop.get_or_default(), Ok(&3));
///
/// prop.unset();
/// assert!(prop.get_or_default().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoredDefaultableProperty<T> {
    value: Option<T>,
    default: Option<T>,
}

impl<T> StoredDefaultableProperty<T> {
    /// Creates a container with neither slot set.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: None,
            default: None,
        }
    }

    /// Creates a container with only the default slot set.
    #[must_use]
    #[inline]
    pub const fn with_default(default: T) -> Self {
        Self {
            value: None,
            default: Some(default),
        }
    }

    /// Creates a container with only the value slot set.
    #[must_use]
    #[inline]
    pub const fn with_value(value: T) -> Self {
        Self {
            value: Some(value),
            default: None,
        }
    }

    /// Creates a container with both slots set.
    #[must_use]
    #[inline]
    pub const fn with_value_and_default(value: T, default: T) -> Self {
        Self {
            value: Some(value),
            default: Some(default),
        }
    }

    /// Sets `value`, returning the previously held value.
    ///
    /// The default slot is not affected.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Moves the held value out, leaving the value slot empty.
    ///
    /// The default slot is not affected.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Returns the held value as an `Option`.
    #[must_use]
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the default value as an `Option`.
    #[must_use]
    #[inline]
    pub fn default_as_option(&self) -> Option<&T> {
        self.default.as_ref()
    }
}

impl<T> Default for StoredDefaultableProperty<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Property<T> for StoredDefaultableProperty<T> {
    #[inline]
    fn is_set(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    fn get(&self) -> Result<&T, NoSuchValue> {
        self.value.as_ref().ok_or(NoSuchValue::new())
    }
}

impl<T> MutableProperty<T> for StoredDefaultableProperty<T> {
    #[inline]
    fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    #[inline]
    fn unset(&mut self) {
        self.value = None;
    }
}

impl<T> DefaultableProperty<T> for StoredDefaultableProperty<T> {
    #[inline]
    fn has_default(&self) -> bool {
        self.default.is_some()
    }

    #[inline]
    fn get_default(&self) -> Result<&T, NoSuchValue> {
        self.default.as_ref().ok_or(NoSuchValue::new())
    }
}

impl<T> MutableDefaultableProperty<T> for StoredDefaultableProperty<T> {
    #[inline]
    fn set_default(&mut self, value: T) {
        self.default = Some(value);
    }

    #[inline]
    fn unset_default(&mut self) {
        self.default = None;
    }
}

impl<T: Clone> DelegateProperty<T, Result<T, NoSuchValue>> for StoredDefaultableProperty<T> {
    #[inline]
    fn get_value<O: ?Sized>(&self, _owner: &O, field: &Field) -> Result<T, NoSuchValue> {
        read_defaulted(self, field)
    }
}
