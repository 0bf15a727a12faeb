//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! outcome-rail provides two composable container families for propagating
//! "no value" and "failed operation" states through call chains without null
//! checks scattered across caller code:
//!
//! - [`Maybe`] tracks the presence or absence of a single value.
//! - [`Outcome`] tracks the success or failure of an operation, carrying
//!   either a payload or a fault.
//! - [`Status`] is the payload-free variant of [`Outcome`], for operations
//!   whose only observable result is pass/fail.
//!
//! Any error value that implements the [`Fault`] trait can ride the failure
//! channel; the trait only asks for a human-readable message and a diagnostic
//! emission hook.
//!
//! # Examples
//!
//! ## Chaining through absence
//!
//! ```
//! use outcome_rail::Maybe;
//!
//! let doubled = Maybe::some(5).map(|x| x * 2);
//! assert_eq!(doubled, Maybe::some(10));
//!
//! let absent: Maybe<i32> = Maybe::<i32>::none().map(|x| x * 2);
//! assert!(absent.is_none());
//! ```
//!
//! ## Promoting absence into a failure
//!
//! ```
//! use outcome_rail::{Fault, Maybe};
//!
//! let outcome = Maybe::<i32>::none().into_outcome();
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.error().message(), "Optional value was empty");
//! ```
//!
//! ## Branching on an operation's outcome
//!
//! ```
//! use outcome_rail::{fault, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, outcome_rail::MessageFault> {
//!     Outcome::from_option(raw.parse().ok(), fault!("invalid port: {raw}"))
//! }
//!
//! let port = parse_port("8080")
//!     .inspect_failure(|fault| panic!("unexpected: {fault}"))
//!     .data();
//! assert_eq!(port, 8080);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between the container families and core `Option`/`Result`
pub mod convert;
/// Fault construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The `Fault` capability and extension traits for core types
pub mod traits;
/// The `Maybe`, `Outcome`, and `Status` containers plus standard faults
pub mod types;

pub use convert::*;
pub use traits::{Fault, OptionExt, ResultExt};
pub use types::{EmptyValue, Maybe, MessageFault, Outcome, Status, UnknownFault};
