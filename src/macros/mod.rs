//! Ergonomic macros for constructing faults and outcomes.
//!
//! - [`macro@crate::fault`] - Builds a [`MessageFault`](crate::types::MessageFault)
//!   from a format string, for ad-hoc failure values.
//! - [`macro@crate::outcome`] - Wraps a `Result`-producing expression into an
//!   [`Outcome`](crate::types::Outcome).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{fault, outcome, Outcome};
//!
//! let parsed = outcome!("21".parse::<i32>()).map(|x| x * 2);
//! assert_eq!(parsed.data(), 42);
//!
//! let failed: Outcome<i32, _> = Outcome::failure(fault!("bad input: {}", "xyz"));
//! assert_eq!(failed.error().to_string(), "bad input: xyz");
//! ```

/// Builds a [`MessageFault`](crate::types::MessageFault) from a format string.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fault, Fault};
///
/// let user_id = 42;
/// let f = fault!("user {user_id} not found");
/// assert_eq!(f.message(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! fault {
    ($($arg:tt)*) => {
        $crate::types::MessageFault::new(format!($($arg)*))
    };
}

/// Wraps a `Result`-producing expression into an
/// [`Outcome`](crate::types::Outcome).
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome;
///
/// let ok = outcome!("5".parse::<u8>());
/// assert!(ok.is_success());
///
/// let failed = outcome!("x".parse::<u8>());
/// assert!(failed.is_failure());
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::types::Outcome::from($expr)
    };
}
