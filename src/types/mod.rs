//! Container types and standard faults.
//!
//! This module provides the two container families and the fault values the
//! built-in conversions attach.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Maybe, Status};
//!
//! let status: Status<_> = Maybe::some(5)
//!     .map(|x| x * 2)
//!     .into_outcome()
//!     .into_status();
//!
//! assert!(status.is_success());
//! ```

pub mod alloc_type;
pub mod faults;
pub mod maybe;
pub mod outcome;
pub mod status;

pub use faults::{EmptyValue, MessageFault, UnknownFault};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use status::Status;
