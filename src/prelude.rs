//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fault!`], [`outcome!`]
//! - **Types**: [`Maybe`], [`Outcome`], [`Status`] and the standard faults
//! - **Traits**: [`Fault`], [`OptionExt`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str, EmptyValue> {
//!     let user = if id == 1 { Some("alice") } else { None };
//!     user.into_maybe().into_outcome()
//! }
//!
//! assert_eq!(lookup(1), Outcome::success("alice"));
//! assert!(lookup(9).is_failure());
//! ```

// Macros
pub use crate::{fault, outcome};

// Core types
pub use crate::types::{EmptyValue, Maybe, MessageFault, Outcome, Status, UnknownFault};

// Traits
pub use crate::traits::{Fault, OptionExt, ResultExt};
