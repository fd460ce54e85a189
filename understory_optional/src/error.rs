// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The error returned when an empty slot is read.

use core::fmt;

use crate::delegate::Field;

/// Message used by [`NoSuchValue::new`].
const DEFAULT_MESSAGE: &str = "attempted to unwrap a value that had not been set";

/// Error returned when a value is read from a slot that has none.
///
/// This is the only error kind in the crate. It is produced by
/// [`Property::get`](crate::Property::get) on an unset container,
/// [`DefaultableProperty::get_default`](crate::DefaultableProperty::get_default)
/// on a container without a default, and by
/// [`DefaultableProperty::get_or_default`](crate::DefaultableProperty::get_or_default)
/// when neither slot is set.
///
/// Reads that go through a field delegate additionally record the [`Field`]
/// that was accessed; the message is unchanged.
///
/// # Example
///
/// ```rust
/// use understory_optional::{NoSuchValue, Property, StoredProperty};
///
/// let prop = StoredProperty::<u32>::new();
/// let err = prop.get().unwrap_err();
/// assert_eq!(err, NoSuchValue::new());
/// assert_eq!(
///     err.to_string(),
///     "attempted to unwrap a value that had not been set",
/// );
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NoSuchValue {
    message: &'static str,
    field: Option<Field>,
}

impl NoSuchValue {
    /// Creates the error with the standard message.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::with_message(DEFAULT_MESSAGE)
    }

    /// Creates the error with a custom message.
    #[must_use]
    #[inline]
    pub const fn with_message(message: &'static str) -> Self {
        Self {
            message,
            field: None,
        }
    }

    /// Attaches the field whose read failed.
    #[must_use]
    #[inline]
    pub const fn with_field(self, field: Field) -> Self {
        Self {
            message: self.message,
            field: Some(field),
        }
    }

    /// Returns the error message, without any field prefix.
    #[must_use]
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Returns the field whose read failed, if the error came from a delegate.
    #[must_use]
    #[inline]
    pub const fn field(&self) -> Option<Field> {
        self.field
    }
}

impl Default for NoSuchValue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NoSuchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoSuchValue")
            .field("message", &self.message)
            .field("field", &self.field)
            .finish()
    }
}

impl fmt::Display for NoSuchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(self.message),
        }
    }
}

impl core::error::Error for NoSuchValue {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn default_message() {
        let err = NoSuchValue::new();
        assert_eq!(err.message(), DEFAULT_MESSAGE);
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), DEFAULT_MESSAGE);
        assert_eq!(NoSuchValue::default(), err);
    }

    #[test]
    fn custom_message() {
        let err = NoSuchValue::with_message("width was never configured");
        assert_eq!(err.to_string(), "width was never configured");
        assert_ne!(err, NoSuchValue::new());
    }

    #[test]
    fn field_prefixes_display() {
        let err = NoSuchValue::new().with_field(Field::new("Button", "label"));
        assert_eq!(err.message(), DEFAULT_MESSAGE);
        assert_eq!(err.field(), Some(Field::new("Button", "label")));
        assert_eq!(
            err.to_string(),
            "Button.label: attempted to unwrap a value that had not been set"
        );
    }

    #[test]
    fn debug_lists_fields() {
        let debug = format!("{:?}", NoSuchValue::new());
        assert!(debug.contains("NoSuchValue"));
        assert!(debug.contains("message"));
        assert!(debug.contains("field"));
    }
}
