// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two primitive containers.
//!
//! [`BasicProperty`] always holds a value and [`EmptyProperty`] never does.
//! The helper algebra builds its results out of these two: a
//! [`map`](crate::PropertyExt::map) over a set property yields a
//! `BasicProperty`, and any transformation of an empty one yields an
//! `EmptyProperty`.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::error::NoSuchValue;
use crate::property::Property;

/// An immutable container that always holds a value.
///
/// # Example
///
/// ```rust
/// use understory_optional::{BasicProperty, Property};
///
/// let prop = BasicProperty::new("hello");
/// assert!(prop.is_set());
/// assert_eq!(prop.get(), Ok(&"hello"));
/// assert_eq!(prop.into_inner(), "hello");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BasicProperty<T> {
    value: T,
}

impl<T> BasicProperty<T> {
    /// Wraps `value`.
    #[must_use]
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Unwraps the held value.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for BasicProperty<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Property<T> for BasicProperty<T> {
    #[inline]
    fn is_set(&self) -> bool {
        true
    }

    #[inline]
    fn get(&self) -> Result<&T, NoSuchValue> {
        Ok(&self.value)
    }
}

/// An immutable container that never holds a value.
///
/// `EmptyProperty<T>` is zero-sized and stateless, so every instance is
/// interchangeable with every other instance of the same `T`. The phantom
/// type only pins down which [`Property<T>`] it implements.
///
/// # Example
///
/// ```rust
/// use understory_optional::{EmptyProperty, NoSuchValue, Property};
///
/// const NOTHING: EmptyProperty<u64> = EmptyProperty::new();
///
/// assert!(!NOTHING.is_set());
/// assert_eq!(NOTHING.get(), Err(NoSuchValue::new()));
/// assert_eq!(core::mem::size_of::<EmptyProperty<u64>>(), 0);
/// ```
pub struct EmptyProperty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> EmptyProperty<T> {
    /// Returns the empty container for `T`.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Property<T> for EmptyProperty<T> {
    #[inline]
    fn is_set(&self) -> bool {
        false
    }

    #[inline]
    fn get(&self) -> Result<&T, NoSuchValue> {
        Err(NoSuchValue::new())
    }
}

// Manual trait implementations to avoid requiring T: Clone, etc.

impl<T> Copy for EmptyProperty<T> {}

impl<T> Clone for EmptyProperty<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Default for EmptyProperty<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for EmptyProperty<T> {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for EmptyProperty<T> {}

impl<T> Hash for EmptyProperty<T> {
    #[inline]
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<T> fmt::Debug for EmptyProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmptyProperty")
            .field("type", &core::any::type_name::<T>())
            .finish()
    }
}
