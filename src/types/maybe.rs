//! Absence-tracking container.
//!
//! [`Maybe<T>`] holds zero or one value of `T`. Because presence is tracked by
//! the variant tag rather than by a reserved sentinel value, any payload type
//! is admissible: a `Maybe<Option<u8>>` can genuinely hold `None` as data.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Maybe;
//!
//! let name = Maybe::some("alice");
//! assert!(name.is_some());
//! assert_eq!(name.map(str::len), Maybe::some(5));
//! ```

use crate::types::faults::EmptyValue;
use crate::types::outcome::Outcome;

/// Container holding either one value of `T` or nothing.
///
/// Exactly one of [`is_some`](Maybe::is_some) / [`is_none`](Maybe::is_none)
/// holds at any time. Instances are immutable after construction; every
/// operation consumes the receiver and produces a fresh container.
///
/// Reading the payload of an absent container through [`data`](Maybe::data)
/// is a contract violation and panics; recoverable absence handling goes
/// through [`map`](Maybe::map), [`and_then`](Maybe::and_then), or
/// [`into_outcome`](Maybe::into_outcome) instead.
///
/// # Examples
///
/// ```
/// use outcome_rail::Maybe;
///
/// let present = Maybe::some(5).map(|x| x * 2);
/// assert_eq!(present.data(), 10);
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert!(absent.map(|x| x * 2).is_none());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Maybe<T> {
    /// One value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Maybe<T> {
    /// Creates a present container holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert!(Maybe::some(1).is_some());
    /// ```
    #[inline]
    pub fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent container.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert!(Maybe::<i32>::none().is_none());
    /// ```
    #[inline]
    pub fn none() -> Self {
        Self::Absent
    }

    /// Adopts a core `Option`, the adapter for APIs that naturally return
    /// "value or nothing".
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert_eq!(Maybe::from_option("87".parse::<u8>().ok()), Maybe::some(87));
    /// assert!(Maybe::from_option("x".parse::<u8>().ok()).is_none());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Returns `true` if a value is present.
    #[must_use]
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics if the container is absent. That signals a bug in the calling
    /// code; check [`is_some`](Maybe::is_some) first, or stay in the chain
    /// with [`map`](Maybe::map) / [`into_outcome`](Maybe::into_outcome).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(5).data(), 5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn data(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Maybe::data()` on an `Absent` value"),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Transforms the payload, short-circuiting on absence.
    ///
    /// `f` is never invoked on an absent container. If `f` itself produces a
    /// `Maybe<U>`, use [`and_then`](Maybe::and_then) so the result stays one
    /// container deep; if it produces an `Option<U>`, adapt it with
    /// [`Maybe::from_option`] at the call site.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(5).map(|x| x * 2), Maybe::some(10));
    /// assert!(Maybe::<i32>::none().map(|x| x * 2).is_none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(f(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains a transform that itself reports absence, flattening the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).and_then(half), Maybe::some(4));
    /// assert!(Maybe::some(5).and_then(half).is_none());
    /// assert!(Maybe::none().and_then(half).is_none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Promotes the container into an [`Outcome`], attaching the standard
    /// [`EmptyValue`] fault when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::some(5).into_outcome(), Outcome::success(5));
    /// assert!(Maybe::<i32>::none().into_outcome().is_failure());
    /// ```
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, EmptyValue> {
        self.into_outcome_or(EmptyValue)
    }

    /// Promotes the container into an [`Outcome`], attaching a caller-supplied
    /// fault when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Maybe, Outcome};
    ///
    /// let outcome = Maybe::<i32>::none().into_outcome_or("lookup missed");
    /// assert_eq!(outcome, Outcome::failure("lookup missed"));
    /// ```
    #[inline]
    pub fn into_outcome_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Converts back into a core `Option`.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    /// Returns [`Maybe::Absent`].
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}
