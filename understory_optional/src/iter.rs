// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Iterator views over a property.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::property::Property;

/// An iterator yielding the value of a property, if set.
///
/// Created by [`PropertyExt::as_iter`](crate::PropertyExt::as_iter). The
/// property is not read until the first call to `next`, and at most one item
/// is ever produced.
pub struct Iter<'a, T, P: ?Sized> {
    property: &'a P,
    done: bool,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, P: ?Sized> Iter<'a, T, P> {
    #[inline]
    pub(crate) fn new(property: &'a P) -> Self {
        Self {
            property,
            done: false,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, P: Property<T> + ?Sized> Iterator for Iter<'a, T, P> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.done {
            return None;
        }
        self.done = true;
        let property: &'a P = self.property;
        property.get().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(!self.done && self.property.is_set());
        (remaining, Some(remaining))
    }
}

impl<'a, T: 'a, P: Property<T> + ?Sized> ExactSizeIterator for Iter<'a, T, P> {}

impl<'a, T: 'a, P: Property<T> + ?Sized> FusedIterator for Iter<'a, T, P> {}

impl<T, P: ?Sized> Clone for Iter<'_, T, P> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            property: self.property,
            done: self.done,
            _marker: PhantomData,
        }
    }
}

impl<T, P: ?Sized> fmt::Debug for Iter<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// A restartable view of a property as a collection of at most one item.
///
/// Created by [`PropertyExt::as_iterable`](crate::PropertyExt::as_iterable).
/// Every call to [`into_iter`](IntoIterator::into_iter) starts a fresh
/// traversal that observes the property as it is at that time.
pub struct Iterable<'a, T, P: ?Sized> {
    property: &'a P,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, P: ?Sized> Iterable<'a, T, P> {
    #[inline]
    pub(crate) fn new(property: &'a P) -> Self {
        Self {
            property,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, P: Property<T> + ?Sized> IntoIterator for Iterable<'a, T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, P>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T, P> {
        Iter::new(self.property)
    }
}

impl<T, P: ?Sized> Copy for Iterable<'_, T, P> {}

impl<T, P: ?Sized> Clone for Iterable<'_, T, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, P: ?Sized> fmt::Debug for Iterable<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iterable").finish_non_exhaustive()
    }
}
