//! Payload-free success/failure container.
//!
//! [`Status<E>`] records whether an operation passed or failed, carrying a
//! fault only in the failed case. It is typically produced by discarding the
//! payload of an [`Outcome`](crate::types::Outcome) via
//! [`into_status`](crate::types::Outcome::into_status).

use crate::traits::Fault;

/// Container recording pass/fail for an operation with no observable payload.
///
/// Exactly one of [`is_success`](Status::is_success) /
/// [`is_failure`](Status::is_failure) holds; the failure state is entered iff
/// a fault was supplied at construction.
///
/// # Examples
///
/// ```
/// use outcome_rail::Status;
///
/// let passed: Status<&str> = Status::success();
/// assert!(passed.is_success());
///
/// let failed = Status::failure("write refused");
/// assert!(failed.is_failure());
/// assert_eq!(failed.error(), "write refused");
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Status<E> {
    /// The operation passed.
    Success,
    /// The operation failed with a fault.
    Failure(E),
}

impl<E> Status<E> {
    /// Creates a success status.
    #[inline]
    pub fn success() -> Self {
        Self::Success
    }

    /// Creates a failure status carrying `error`.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the operation passed.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` if the operation failed.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the fault.
    ///
    /// # Panics
    ///
    /// Panics if the status is a success; a bug in the calling code, not a
    /// recoverable condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// assert_eq!(Status::failure("boom").error(), "boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn error(self) -> E {
        match self {
            Self::Success => panic!("called `Status::error()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }

    /// Runs `action` on the fault for its side effect, then returns the
    /// receiver unchanged. No-op on success.
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

    /// Converts into a core `Result` with a unit success.
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<(), E> {
        match self {
            Self::Success => Ok(()),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<E> Default for Status<E> {
    /// Returns [`Status::Success`].
    #[inline]
    fn default() -> Self {
        Self::Success
    }
}

impl<E: Fault> Status<E> {
    /// Emits the fault to the diagnostic sink via [`Fault::log`] if failed,
    /// then returns the receiver unchanged. No-op on success.
    #[inline]
    pub fn log_failure(self) -> Self {
        if let Self::Failure(error) = &self {
            error.log();
        }
        self
    }
}
