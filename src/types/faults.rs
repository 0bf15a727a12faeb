//! Standard fault values used by the built-in conversions.
//!
//! Two of these back the container algebra itself: [`EmptyValue`] is attached
//! when an absent [`Maybe`](crate::types::Maybe) is promoted into an
//! [`Outcome`](crate::types::Outcome), and [`UnknownFault`] is attached when a
//! bare `Option` is adopted as an `Outcome` without a caller-supplied fault.
//! [`MessageFault`] carries an ad-hoc formatted message, usually built through
//! the [`fault!`](crate::fault) macro.

use core::fmt;

use crate::traits::Fault;
use crate::types::alloc_type::String;

/// Fault signaling that an optional value was empty.
///
/// Attached by [`Maybe::into_outcome`](crate::types::Maybe::into_outcome) when
/// the receiver is absent.
///
/// # Examples
///
/// ```
/// use outcome_rail::{EmptyValue, Fault, Maybe};
///
/// let failed = Maybe::<u32>::none().into_outcome();
/// assert_eq!(failed.error(), EmptyValue);
/// assert_eq!(EmptyValue.message(), "Optional value was empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyValue;

impl Fault for EmptyValue {
    #[inline]
    fn message(&self) -> String {
        String::from("Optional value was empty")
    }
}

impl fmt::Display for EmptyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Optional value was empty")
    }
}

impl core::error::Error for EmptyValue {}

/// Fault standing in when an operation failed without reporting a cause.
///
/// Attached by the `From<Option<T>>` conversion for
/// [`Outcome`](crate::types::Outcome) when the source is `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Fault, Outcome, UnknownFault};
///
/// let failed = Outcome::<u32, _>::from(None);
/// assert_eq!(failed.error(), UnknownFault);
/// assert_eq!(UnknownFault.message(), "An unknown error occurred");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnknownFault;

impl Fault for UnknownFault {
    #[inline]
    fn message(&self) -> String {
        String::from("An unknown error occurred")
    }
}

impl fmt::Display for UnknownFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("An unknown error occurred")
    }
}

impl core::error::Error for UnknownFault {}

/// Fault carrying an arbitrary message.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Fault, MessageFault};
///
/// let fault = MessageFault::new("disk full");
/// assert_eq!(fault.message(), "disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageFault {
    message: String,
}

impl MessageFault {
    /// Creates a fault from any string-like message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }
}

impl Fault for MessageFault {
    #[inline]
    fn message(&self) -> String {
        self.message.clone()
    }
}

impl fmt::Display for MessageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for MessageFault {}

impl From<String> for MessageFault {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for MessageFault {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
