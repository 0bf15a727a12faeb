//! The capability contract for values carried on the failure channel.
//!
//! Any type can ride [`Outcome`](crate::types::Outcome) or
//! [`Status`](crate::types::Status) as an error, as long as it can produce a
//! human-readable message and emit itself to a diagnostic sink. The sink is an
//! external collaborator: with the `tracing` feature it is the `tracing`
//! subscriber, with plain `std` it is stderr, and under `no_std` the default
//! [`log`](Fault::log) is a no-op unless the implementor overrides it.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::Fault;
//!
//! struct Timeout {
//!     after_ms: u64,
//! }
//!
//! impl Fault for Timeout {
//!     fn message(&self) -> String {
//!         format!("operation timed out after {}ms", self.after_ms)
//!     }
//! }
//!
//! let fault = Timeout { after_ms: 250 };
//! assert_eq!(fault.message(), "operation timed out after 250ms");
//! ```

use crate::types::alloc_type::{Arc, Box, String};

/// Capability contract for failure values.
///
/// Containers never own more than the fault value itself; if a fault wraps a
/// shared resource, managing that resource is the fault type's own concern.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Fault, Outcome};
///
/// let outcome: Outcome<i32, &str> = Outcome::failure("connection refused");
/// assert_eq!(outcome.error().message(), "connection refused");
/// ```
pub trait Fault {
    /// Returns the human-readable description of this fault.
    ///
    /// Must be pure: no side effects, stable across calls.
    fn message(&self) -> String;

    /// Emits this fault's message to the diagnostic sink.
    ///
    /// The default implementation writes to the `tracing` subscriber when the
    /// `tracing` feature is enabled, falls back to stderr under plain `std`,
    /// and does nothing under `no_std`. Implementors with richer diagnostics
    /// can override it.
    fn log(&self) {
        let message = self.message();
        #[cfg(feature = "tracing")]
        tracing::error!(fault = %message);
        #[cfg(all(feature = "std", not(feature = "tracing")))]
        std::eprintln!("{message}");
        #[cfg(not(feature = "std"))]
        let _ = message;
    }
}

impl Fault for &'static str {
    #[inline]
    fn message(&self) -> String {
        String::from(*self)
    }
}

impl Fault for String {
    #[inline]
    fn message(&self) -> String {
        self.clone()
    }
}

// Forwarding impls so faults can be boxed or shared by reference across
// containers without losing a custom `log`.

impl<F: Fault + ?Sized> Fault for Box<F> {
    #[inline]
    fn message(&self) -> String {
        (**self).message()
    }

    #[inline]
    fn log(&self) {
        (**self).log()
    }
}

impl<F: Fault + ?Sized> Fault for Arc<F> {
    #[inline]
    fn message(&self) -> String {
        (**self).message()
    }

    #[inline]
    fn log(&self) {
        (**self).log()
    }
}
