// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The property capability traits.
//!
//! [`Property`] is the base capability: a container holding zero or one value.
//! [`MutableProperty`] adds `set`/`unset`, [`DefaultableProperty`] adds an
//! independent fallback slot, and [`MutableDefaultableProperty`] makes that
//! fallback slot writable.
//!
//! Forwarding implementations are provided for `&P`, `&mut P` and `Box<P>`,
//! and [`Option<T>`] is itself a mutable property.

use alloc::boxed::Box;
use either::Either;

use crate::error::NoSuchValue;

/// A value which may or may not be set.
///
/// # Invariants
///
/// - When [`is_set`](Self::is_set) is `false`, [`get`](Self::get) returns
///   `Err(NoSuchValue)`.
/// - When `is_set` is `true`, `get` returns `Ok` with the same value until the
///   container is mutated.
///
/// # Example
///
/// ```rust
/// use understory_optional::{BasicProperty, EmptyProperty, Property};
///
/// let set = BasicProperty::new(3);
/// assert!(set.is_set());
/// assert_eq!(set.get(), Ok(&3));
///
/// let empty = EmptyProperty::<i32>::new();
/// assert!(!empty.is_set());
/// assert!(empty.get().is_err());
/// ```
pub trait Property<T> {
    /// Returns `true` if this container currently holds a value.
    fn is_set(&self) -> bool;

    /// Returns the held value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchValue`] if no value is set.
    fn get(&self) -> Result<&T, NoSuchValue>;
}

/// A [`Property`] whose value can be replaced or cleared.
pub trait MutableProperty<T>: Property<T> {
    /// Sets the held value, replacing any previous one.
    fn set(&mut self, value: T);

    /// Clears the held value.
    ///
    /// Does nothing if the container is already empty.
    fn unset(&mut self);
}

/// A [`Property`] with a second, independent fallback slot.
///
/// The primary slot and the default slot never affect each other: setting or
/// clearing one leaves the other as it was.
pub trait DefaultableProperty<T>: Property<T> {
    /// Returns `true` if a default value is set.
    fn has_default(&self) -> bool;

    /// Returns the default value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchValue`] if no default is set.
    fn get_default(&self) -> Result<&T, NoSuchValue>;

    /// Returns the held value if set, otherwise the default value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchValue`] if neither slot is set. The error is the one
    /// reported by [`Property::get`], not by [`get_default`](Self::get_default).
    ///
    /// # Example
    ///
    /// ```rust
    /// use understory_optional::{
    ///     DefaultableProperty, MutableProperty, StoredDefaultableProperty,
    /// };
    ///
    /// let mut prop = StoredDefaultableProperty::with_default("x");
    /// assert_eq!(prop.get_or_default(), Ok(&"x"));
    ///
    /// prop.set("y");
    /// assert_eq!(prop.get_or_default(), Ok(&"y"));
    ///
    /// prop.unset();
    /// assert_eq!(prop.get_or_default(), Ok(&"x"));
    /// ```
    fn get_or_default(&self) -> Result<&T, NoSuchValue> {
        // `get` is the fallthrough so an empty container reports the primary
        // slot's error.
        if !self.is_set() && self.has_default() {
            self.get_default()
        } else {
            self.get()
        }
    }
}

/// A [`DefaultableProperty`] whose slots are both writable.
pub trait MutableDefaultableProperty<T>: MutableProperty<T> + DefaultableProperty<T> {
    /// Sets the default value, replacing any previous default.
    fn set_default(&mut self, value: T);

    /// Clears the default value.
    ///
    /// Does nothing if no default is set.
    fn unset_default(&mut self);
}

// =========================================================================
// Option
// =========================================================================

impl<T> Property<T> for Option<T> {
    #[inline]
    fn is_set(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn get(&self) -> Result<&T, NoSuchValue> {
        self.as_ref().ok_or(NoSuchValue::new())
    }
}

impl<T> MutableProperty<T> for Option<T> {
    #[inline]
    fn set(&mut self, value: T) {
        *self = Some(value);
    }

    #[inline]
    fn unset(&mut self) {
        *self = None;
    }
}

// =========================================================================
// Either
// =========================================================================

impl<T, L, R> Property<T> for Either<L, R>
where
    L: Property<T>,
    R: Property<T>,
{
    #[inline]
    fn is_set(&self) -> bool {
        either::for_both!(self, inner => inner.is_set())
    }

    #[inline]
    fn get(&self) -> Result<&T, NoSuchValue> {
        either::for_both!(self, inner => inner.get())
    }
}

// =========================================================================
// Forwarding
// =========================================================================

macro_rules! forward_property {
    ($($ty:ty),*) => {$(
        impl<T, P: Property<T> + ?Sized> Property<T> for $ty {
            #[inline]
            fn is_set(&self) -> bool {
                (**self).is_set()
            }

            #[inline]
            fn get(&self) -> Result<&T, NoSuchValue> {
                (**self).get()
            }
        }

        impl<T, P: DefaultableProperty<T> + ?Sized> DefaultableProperty<T> for $ty {
            #[inline]
            fn has_default(&self) -> bool {
                (**self).has_default()
            }

            #[inline]
            fn get_default(&self) -> Result<&T, NoSuchValue> {
                (**self).get_default()
            }

            #[inline]
            fn get_or_default(&self) -> Result<&T, NoSuchValue> {
                (**self).get_or_default()
            }
        }
    )*};
}

forward_property!(&P, &mut P, Box<P>);

macro_rules! forward_mutable_property {
    ($($ty:ty),*) => {$(
        impl<T, P: MutableProperty<T> + ?Sized> MutableProperty<T> for $ty {
            #[inline]
            fn set(&mut self, value: T) {
                (**self).set(value);
            }

            #[inline]
            fn unset(&mut self) {
                (**self).unset();
            }
        }

        impl<T, P: MutableDefaultableProperty<T> + ?Sized> MutableDefaultableProperty<T> for $ty {
            #[inline]
            fn set_default(&mut self, value: T) {
                (**self).set_default(value);
            }

            #[inline]
            fn unset_default(&mut self) {
                (**self).unset_default();
            }
        }
    )*};
}

forward_mutable_property!(&mut P, Box<P>);
