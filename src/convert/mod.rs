//! Conversion helpers between the container families and core types.
//!
//! These adapters make it straightforward to incrementally adopt
//! `outcome-rail` by wrapping legacy `Option`/`Result` values at the boundary
//! and unwrapping them again when calling back into external APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{Maybe, Outcome};
//!
//! let outcome = maybe_to_outcome(Maybe::some(5));
//! assert_eq!(outcome, Outcome::success(5));
//!
//! let result = outcome_to_result(outcome);
//! assert_eq!(result.map_err(|_| ()), Ok(5));
//! ```

use crate::types::{EmptyValue, Maybe, Outcome, Status};

/// Promotes a `Maybe` into an `Outcome`, attaching [`EmptyValue`] on absence.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::maybe_to_outcome;
/// use outcome_rail::{Maybe, Outcome};
///
/// assert_eq!(maybe_to_outcome(Maybe::some(5)), Outcome::success(5));
/// assert!(maybe_to_outcome(Maybe::<i32>::none()).is_failure());
/// ```
#[inline]
pub fn maybe_to_outcome<T>(maybe: Maybe<T>) -> Outcome<T, EmptyValue> {
    maybe.into_outcome()
}

/// Demotes an `Outcome` into a `Maybe`, discarding the fault.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_maybe;
/// use outcome_rail::{Maybe, Outcome};
///
/// let failed: Outcome<i32, &str> = Outcome::failure("boom");
/// assert_eq!(outcome_to_maybe(failed), Maybe::none());
/// ```
#[inline]
pub fn outcome_to_maybe<T, E>(outcome: Outcome<T, E>) -> Maybe<T> {
    match outcome {
        Outcome::Success(value) => Maybe::Present(value),
        Outcome::Failure(_) => Maybe::Absent,
    }
}

/// Downgrades an `Outcome` into a `Status`, discarding the payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_status;
/// use outcome_rail::{Outcome, Status};
///
/// let failed: Outcome<i32, &str> = Outcome::failure("boom");
/// assert_eq!(outcome_to_status(failed), Status::failure("boom"));
/// ```
#[inline]
pub fn outcome_to_status<T, E>(outcome: Outcome<T, E>) -> Status<E> {
    outcome.into_status()
}

/// Converts an `Outcome` into a core `Result`.
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts a core `Result` into an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// let result: Result<i32, &str> = Err("boom");
/// assert_eq!(result_to_outcome(result), Outcome::failure("boom"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(error),
    }
}

/// Converts a `Status` into a core `Result` with a unit success.
#[inline]
pub fn status_to_result<E>(status: Status<E>) -> Result<(), E> {
    status.into_result()
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<Outcome<T, E>> for Status<E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_status()
    }
}

impl<E> From<Result<(), E>> for Status<E> {
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Status::Success,
            Err(error) => Status::Failure(error),
        }
    }
}

impl<E> From<Status<E>> for Result<(), E> {
    #[inline]
    fn from(status: Status<E>) -> Self {
        status.into_result()
    }
}
