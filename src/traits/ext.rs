//! Extension traits for entering the container algebra from core types.
//!
//! These traits let existing `Option`/`Result`-based code step onto the rail
//! without intermediate `match` boilerplate.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{OptionExt, ResultExt};
//!
//! let maybe = "42".parse::<i32>().ok().into_maybe();
//! assert!(maybe.is_some());
//!
//! let outcome = "x".parse::<i32>().map_err(|e| e.to_string()).into_outcome();
//! assert!(outcome.is_failure());
//! ```

use crate::types::{Maybe, Outcome, Status};

/// Extension trait adopting core `Option` values into the algebra.
pub trait OptionExt<T> {
    /// Converts into a [`Maybe`], mapping `None` to absence.
    fn into_maybe(self) -> Maybe<T>;

    /// Converts into an [`Outcome`], pairing `None` with `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::OptionExt;
    /// use outcome_rail::Outcome;
    ///
    /// let missing: Option<i32> = None;
    /// assert_eq!(missing.or_fault("not found"), Outcome::failure("not found"));
    /// ```
    fn or_fault<E>(self, error: E) -> Outcome<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from_option(self)
    }

    #[inline]
    fn or_fault<E>(self, error: E) -> Outcome<T, E> {
        Outcome::from_option(self, error)
    }
}

/// Extension trait adopting core `Result` values into the algebra.
pub trait ResultExt<T, E> {
    /// Converts into an [`Outcome`], preserving the payload or error.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Converts into a [`Status`], discarding the payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::ResultExt;
    ///
    /// let written: Result<usize, &str> = Ok(512);
    /// assert!(written.into_status().is_success());
    /// ```
    fn into_status(self) -> Status<E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn into_status(self) -> Status<E> {
        match self {
            Ok(_) => Status::Success,
            Err(error) => Status::Failure(error),
        }
    }
}
