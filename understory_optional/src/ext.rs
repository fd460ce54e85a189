// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helper algebra over the property traits.
//!
//! [`PropertyExt`] and [`DefaultablePropertyExt`] are implemented for every
//! [`Property`] and [`DefaultableProperty`] respectively. Apart from `get`
//! style accessors that report [`NoSuchValue`](crate::NoSuchValue), none of
//! these helpers fail: an empty slot degrades to `None`, a fallback, or a
//! no-op.
//!
//! Every closure-taking helper accepts an [`FnOnce`], so the closure runs at
//! most once per call.

use either::Either;

use crate::basic::{BasicProperty, EmptyProperty};
use crate::iter::{Iter, Iterable};
use crate::property::{DefaultableProperty, Property};

/// The result of [`PropertyExt::map`]: a set [`BasicProperty`] or an
/// [`EmptyProperty`].
pub type Mapped<R> = Either<BasicProperty<R>, EmptyProperty<R>>;

/// The result of [`PropertyExt::flat_map`]: the property produced by the
/// closure, or an [`EmptyProperty`].
pub type FlatMapped<P, R> = Either<P, EmptyProperty<R>>;

/// Extension methods for [`Property`].
///
/// # Example
///
/// ```rust
/// use understory_optional::{Property, PropertyExt, StoredProperty};
///
/// let name = StoredProperty::with_value("ada");
///
/// let len = name.map(|s| s.len());
/// assert_eq!(len.get_or_null(), Some(&3));
///
/// let mut seen = None;
/// name.if_present(|s| seen = Some(*s));
/// assert_eq!(seen, Some("ada"));
///
/// let all: Vec<_> = name.as_iter().collect();
/// assert_eq!(all, [&"ada"]);
/// ```
pub trait PropertyExt<T>: Property<T> {
    /// Returns the held value, or `None` if unset.
    #[inline]
    fn get_or_null(&self) -> Option<&T> {
        self.get().ok()
    }

    /// Returns a clone of the held value, or `fallback` if unset.
    #[inline]
    fn get_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        self.get_or_null().cloned().unwrap_or(fallback)
    }

    /// Returns `true` if no value is set.
    #[inline]
    fn is_empty(&self) -> bool {
        !self.is_set()
    }

    /// Returns a clone of the held value, or the result of `f` if unset.
    ///
    /// Nothing is cached: each call on an unset property calls `f` again.
    #[inline]
    fn get_or_compute<F>(&self, f: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        self.get_or_null().cloned().unwrap_or_else(f)
    }

    /// Calls `f` with the held value, if set.
    #[inline]
    fn if_present<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = self.get_or_null() {
            f(value);
        }
    }

    /// Calls `f` if no value is set.
    #[inline]
    fn if_absent<F>(&self, f: F)
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            f();
        }
    }

    /// Applies `f` to the held value.
    ///
    /// Returns a set [`BasicProperty`] holding `f(value)`, or an
    /// [`EmptyProperty`] without calling `f` if unset.
    #[inline]
    fn map<R, F>(&self, f: F) -> Mapped<R>
    where
        F: FnOnce(&T) -> R,
    {
        match self.get_or_null() {
            Some(value) => Either::Left(BasicProperty::new(f(value))),
            None => Either::Right(EmptyProperty::new()),
        }
    }

    /// Applies `f` to the held value and returns the property it produces.
    ///
    /// Returns an [`EmptyProperty`] without calling `f` if unset.
    #[inline]
    fn flat_map<R, P, F>(&self, f: F) -> FlatMapped<P, R>
    where
        P: Property<R>,
        F: FnOnce(&T) -> P,
    {
        match self.get_or_null() {
            Some(value) => Either::Left(f(value)),
            None => Either::Right(EmptyProperty::new()),
        }
    }

    /// Returns an iterator over the held value.
    ///
    /// The iterator yields the value if set, and nothing otherwise. The
    /// property is read when iteration starts.
    #[inline]
    fn as_iter(&self) -> Iter<'_, T, Self> {
        Iter::new(self)
    }

    /// Returns a restartable view of the held value as a collection.
    ///
    /// Each traversal of the view is independent and reads the property
    /// afresh.
    #[inline]
    fn as_iterable(&self) -> Iterable<'_, T, Self> {
        Iterable::new(self)
    }
}

impl<T, P: Property<T> + ?Sized> PropertyExt<T> for P {}

/// Extension methods for [`DefaultableProperty`].
///
/// These mirror the [`PropertyExt`] accessors, but consult the default slot
/// before giving up.
///
/// # Example
///
/// ```rust
/// use understory_optional::{DefaultablePropertyExt, StoredDefaultableProperty};
///
/// let empty = StoredDefaultableProperty::<u32>::new();
/// assert_eq!(empty.get_or_default_or_null(), None);
/// assert_eq!(empty.get_or_default_or(7), 7);
///
/// let defaulted = StoredDefaultableProperty::with_default(1);
/// assert_eq!(defaulted.get_or_default_or_compute(|| unreachable!()), 1);
/// ```
pub trait DefaultablePropertyExt<T>: DefaultableProperty<T> {
    /// Returns the held value, else the default value, else `None`.
    #[inline]
    fn get_or_default_or_null(&self) -> Option<&T> {
        self.get().or_else(|_| self.get_default()).ok()
    }

    /// Returns a clone of the held or default value, or `fallback` if
    /// neither is set.
    #[inline]
    fn get_or_default_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        self.get_or_default_or_null().cloned().unwrap_or(fallback)
    }

    /// Returns a clone of the held or default value, or the result of `f` if
    /// neither is set.
    #[inline]
    fn get_or_default_or_compute<F>(&self, f: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        self.get_or_default_or_null().cloned().unwrap_or_else(f)
    }
}

impl<T, P: DefaultableProperty<T> + ?Sized> DefaultablePropertyExt<T> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{MutableDefaultableProperty, MutableProperty};
    use crate::stored::{StoredDefaultableProperty, StoredProperty};
    use core::cell::Cell;

    #[test]
    fn get_or_null_and_get_or() {
        let mut prop = StoredProperty::<i32>::new();
        assert_eq!(prop.get_or_null(), None);
        assert_eq!(prop.get_or(0), 0);

        prop.set(5);
        assert_eq!(prop.get_or_null(), Some(&5));
        assert_eq!(prop.get_or(0), 5);
    }

    #[test]
    fn is_empty_mirrors_is_set() {
        let mut prop = StoredProperty::<()>::new();
        assert!(prop.is_empty());
        prop.set(());
        assert!(!prop.is_empty());
    }

    #[test]
    fn get_or_compute_is_lazy_and_uncached() {
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            42
        };

        let set = StoredProperty::with_value(1);
        assert_eq!(set.get_or_compute(compute), 1);
        assert_eq!(calls.get(), 0);

        let unset = StoredProperty::<i32>::new();
        assert_eq!(unset.get_or_compute(compute), 42);
        assert_eq!(unset.get_or_compute(compute), 42);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn if_present_and_if_absent() {
        let present = Cell::new(0);
        let absent = Cell::new(0);

        let mut prop = StoredProperty::with_value(3);
        prop.if_present(|v| present.set(present.get() + *v));
        prop.if_absent(|| absent.set(absent.get() + 1));
        assert_eq!((present.get(), absent.get()), (3, 0));

        prop.unset();
        prop.if_present(|v| present.set(present.get() + *v));
        prop.if_absent(|| absent.set(absent.get() + 1));
        assert_eq!((present.get(), absent.get()), (3, 1));
    }

    #[test]
    fn map_wraps_result() {
        let calls = Cell::new(0);
        let prop = StoredProperty::with_value(4);
        let mapped = prop.map(|v| {
            calls.set(calls.get() + 1);
            v * 2
        });
        assert!(matches!(mapped, Either::Left(_)));
        assert_eq!(mapped.get(), Ok(&8));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn map_over_empty_skips_closure() {
        let calls = Cell::new(0);
        let prop = StoredProperty::<i32>::new();
        let mapped = prop.map(|v| {
            calls.set(calls.get() + 1);
            *v
        });
        assert!(!mapped.is_set());
        assert_eq!(mapped, Either::Right(EmptyProperty::new()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn flat_map_returns_inner_property() {
        let prop = StoredProperty::with_value(2);
        let flat = prop.flat_map(|v| StoredDefaultableProperty::with_default(*v + 1));
        assert!(!flat.is_set());

        let flat = prop.flat_map(|v| StoredProperty::with_value(*v + 1));
        assert_eq!(flat.get(), Ok(&3));

        let empty = StoredProperty::<i32>::new();
        let flat = empty.flat_map(|_| -> BasicProperty<i32> { unreachable!() });
        assert!(!flat.is_set());
    }

    #[test]
    fn as_iter_reflects_current_state() {
        let mut prop = StoredProperty::<char>::new();
        assert_eq!(prop.as_iter().count(), 0);

        prop.set('z');
        assert_eq!(prop.as_iter().collect::<alloc::vec::Vec<_>>(), [&'z']);
        assert_eq!(prop.as_iterable().into_iter().next(), Some(&'z'));
    }

    #[test]
    fn defaultable_helpers() {
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            0
        };

        let mut prop = StoredDefaultableProperty::<i32>::new();
        assert_eq!(prop.get_or_default_or_null(), None);
        assert_eq!(prop.get_or_default_or(9), 9);
        assert_eq!(prop.get_or_default_or_compute(compute), 0);
        assert_eq!(calls.get(), 1);

        prop.set_default(2);
        assert_eq!(prop.get_or_default_or_null(), Some(&2));
        assert_eq!(prop.get_or_default_or(9), 2);
        assert_eq!(prop.get_or_default_or_compute(compute), 2);

        prop.set(3);
        assert_eq!(prop.get_or_default_or_null(), Some(&3));
        assert_eq!(prop.get_or_default_or(9), 3);
        assert_eq!(prop.get_or_default_or_compute(compute), 3);
        assert_eq!(calls.get(), 1);
    }
}
