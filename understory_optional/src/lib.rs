// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_optional --heading-base-level=0

//! Understory Optional: values that may or may not be set.
//!
//! This crate provides a small lattice of capability traits around a single
//! optional value, plus a helper algebra on top of them. It plays the same role
//! as [`Option`], but as a set of traits, so that the storage behind a value
//! (a plain slot, a slot with a fallback default, a field on some object) can
//! vary while callers keep one vocabulary.
//!
//! ## Capabilities
//!
//! - [`Property`]: `is_set` and `get`. Reading an unset property reports
//!   [`NoSuchValue`].
//! - [`MutableProperty`]: adds `set` and `unset`.
//! - [`DefaultableProperty`]: adds an independent default slot (`has_default`,
//!   `get_default`) and `get_or_default`, which prefers the value and falls back
//!   to the default.
//! - [`MutableDefaultableProperty`]: makes the default slot writable.
//! - [`DelegateProperty`] and friends: adapters for using a container as the
//!   backing store of a named [`Field`] on an owning object.
//!
//! ## Containers
//!
//! - [`BasicProperty`]: always set, immutable.
//! - [`EmptyProperty`]: never set, zero-sized.
//! - [`StoredProperty`]: a mutable slot.
//! - [`StoredDefaultableProperty`]: a mutable slot with a mutable default.
//! - [`Option<T>`] is itself a [`MutableProperty`], and `&P`, `&mut P` and
//!   `Box<P>` forward to `P`.
//!
//! ## Helpers
//!
//! [`PropertyExt`] provides `get_or_null`, `get_or`, `is_empty`,
//! `get_or_compute`, `if_present`, `if_absent`, `map`, `flat_map`, `as_iter`
//! and `as_iterable` for every property. [`DefaultablePropertyExt`] provides
//! `get_or_default_or_null`, `get_or_default_or` and
//! `get_or_default_or_compute` for every defaultable property.
//!
//! Helpers never fail. Closures are taken as [`FnOnce`] and are called at most
//! once, and only when needed.
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_optional::{
//!     DefaultableProperty, MutableDefaultableProperty, MutableProperty, Property, PropertyExt,
//!     StoredDefaultableProperty, StoredProperty,
//! };
//!
//! let mut count = StoredProperty::<u32>::new();
//! assert!(!count.is_set());
//! assert_eq!(count.get_or(0), 0);
//!
//! count.set(5);
//! assert_eq!(count.get(), Ok(&5));
//! assert_eq!(count.map(|n| n * 2).get_or(0), 10);
//!
//! count.unset();
//! assert!(count.get().is_err());
//!
//! let mut theme = StoredDefaultableProperty::<&str>::new();
//! theme.set_default("light");
//! assert_eq!(theme.get_or_default(), Ok(&"light"));
//!
//! theme.set("dark");
//! assert_eq!(theme.get_or_default(), Ok(&"dark"));
//!
//! theme.unset();
//! assert_eq!(theme.get_or_default(), Ok(&"light"));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod basic;
pub mod delegate;
mod error;
mod ext;
mod iter;
mod property;
mod stored;

pub use basic::{BasicProperty, EmptyProperty};
pub use delegate::{
    DefaultableDelegateProperty, DelegateProperty, Field, MutableDefaultableDelegateProperty,
    MutableDelegateProperty,
};
pub use error::NoSuchValue;
pub use ext::{DefaultablePropertyExt, FlatMapped, Mapped, PropertyExt};
pub use iter::{Iter, Iterable};
pub use property::{DefaultableProperty, MutableDefaultableProperty, MutableProperty, Property};
pub use stored::{StoredDefaultableProperty, StoredProperty};
