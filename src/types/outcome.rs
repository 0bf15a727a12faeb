//! Success/failure container.
//!
//! [`Outcome<T, E>`] holds either a payload of `T` or a fault of `E`; exactly
//! one of the two by construction, with no partially-built state expressible.
//! Failure short-circuits every chaining operation and the original fault
//! value is forwarded unchanged, never recomputed or re-wrapped.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn checked_div(num: i32, den: i32) -> Outcome<i32, &'static str> {
//!     if den == 0 {
//!         Outcome::failure("division by zero")
//!     } else {
//!         Outcome::success(num / den)
//!     }
//! }
//!
//! let result = checked_div(10, 2).map(|x| x + 1);
//! assert_eq!(result, Outcome::success(6));
//!
//! let failed = checked_div(10, 0).map(|x| x + 1);
//! assert_eq!(failed, Outcome::failure("division by zero"));
//! ```

use crate::traits::Fault;
use crate::types::faults::UnknownFault;
use crate::types::status::Status;

/// Container holding either a success payload or a failure value.
///
/// The two failure tiers are kept strictly apart: a fault carried in the
/// [`Failure`](Outcome::Failure) variant is the modeled, recoverable path,
/// while reading [`data`](Outcome::data) on a failure or
/// [`error`](Outcome::error) on a success is a contract violation that
/// panics. Chaining operations never convert one tier into the other.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let outcome: Outcome<u32, &str> = Outcome::success(2)
///     .map(|x| x * 10)
///     .and_then(|x| if x > 5 { Outcome::success(x) } else { Outcome::failure("too small") });
/// assert_eq!(outcome.data(), 20);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The operation produced a payload.
    Success(T),
    /// The operation failed with a fault.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::success(5);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome carrying `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("boom");
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Adopts a core `Option`, pairing absence with a caller-supplied fault.
    ///
    /// The adapter for underlying operations that communicate failure only by
    /// returning nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let found = Outcome::from_option(Some(5), "not found");
    /// assert_eq!(found, Outcome::success(5));
    ///
    /// let missing = Outcome::from_option(None::<i32>, "not found");
    /// assert_eq!(missing, Outcome::failure("not found"));
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>, error: E) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(error),
        }
    }

    /// Returns `true` if the outcome holds a payload.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds a fault.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure. That signals a bug in the calling
    /// code; branch with [`is_success`](Outcome::is_success) or stay in the
    /// chain with [`map`](Outcome::map) / [`inspect`](Outcome::inspect).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(outcome.data(), 5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn data(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Outcome::data()` on a `Failure` value"),
        }
    }

    /// Returns the fault.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("boom");
    /// assert_eq!(outcome.error(), "boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn error(self) -> E {
        match self {
            Self::Success(_) => panic!("called `Outcome::error()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the payload, short-circuiting on failure.
    ///
    /// A failed receiver forwards its fault untouched and `f` is never
    /// invoked. If `f` itself produces an `Outcome<U, E>`, use
    /// [`and_then`](Outcome::and_then) so the result stays one container
    /// deep; if it produces an `Option<U>`, adapt it with
    /// [`Outcome::from_option`] at the call site.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(ok.map(|x| x * 2), Outcome::success(10));
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("boom");
    /// assert_eq!(failed.map(|x| x * 2), Outcome::failure("boom"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a transform that itself reports failure, flattening the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn positive(x: i32) -> Outcome<i32, &'static str> {
    ///     if x > 0 { Outcome::success(x) } else { Outcome::failure("not positive") }
    /// }
    ///
    /// assert_eq!(Outcome::success(5).and_then(positive), Outcome::success(5));
    /// assert_eq!(Outcome::success(-5).and_then(positive), Outcome::failure("not positive"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the fault value, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<i32, u32> = Outcome::failure(404);
    /// let mapped = failed.map_failure(|code| format!("HTTP {code}"));
    /// assert_eq!(mapped, Outcome::failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Attempts to recover from a failure with a fallback computation.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("primary down");
    /// let recovered = failed.recover(|_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::success(0));
    /// ```
    #[inline]
    pub fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    /// Runs `action` on the payload for its side effect, then returns the
    /// receiver unchanged for further chaining. No-op on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32, &str> = Outcome::success(5);
    /// let unchanged = outcome.inspect(|x| seen = Some(*x));
    /// assert_eq!(seen, Some(5));
    /// assert_eq!(unchanged, Outcome::success(5));
    /// ```
    #[inline]
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the fault for its side effect, then returns the
    /// receiver unchanged. No-op on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32, &str> = Outcome::failure("boom");
    /// outcome.inspect_failure(|e| seen = Some(*e)).error();
    /// assert_eq!(seen, Some("boom"));
    /// ```
    #[inline]
    pub fn inspect_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Discards the payload, keeping only pass/fail plus the fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status};
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(ok.into_status(), Status::success());
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("boom");
    /// assert_eq!(failed.into_status(), Status::failure("boom"));
    /// ```
    #[inline]
    pub fn into_status(self) -> Status<E> {
        match self {
            Self::Success(_) => Status::Success,
            Self::Failure(error) => Status::Failure(error),
        }
    }

    /// Converts into a core `Result`.
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E: Fault> Outcome<T, E> {
    /// Emits the fault to the diagnostic sink via [`Fault::log`] if failed,
    /// then returns the receiver unchanged. No-op on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("boom");
    /// let unchanged = outcome.log_failure();
    /// assert!(unchanged.is_failure());
    /// ```
    #[inline]
    pub fn log_failure(self) -> Self {
        if let Self::Failure(error) = &self {
            error.log();
        }
        self
    }
}

impl<T> From<Option<T>> for Outcome<T, UnknownFault> {
    /// Adopts a core `Option` without a caller-supplied fault, pairing `None`
    /// with the standard [`UnknownFault`].
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value, UnknownFault)
    }
}
