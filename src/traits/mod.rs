//! Core traits of the container algebra.
//!
//! - [`Fault`]: the capability contract any failure value must satisfy
//! - [`OptionExt`] / [`ResultExt`]: adapters from core `Option`/`Result`
//!   into [`Maybe`](crate::types::Maybe) / [`Outcome`](crate::types::Outcome)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{Fault, OptionExt};
//!
//! let outcome = Some(5).or_fault("missing");
//! assert_eq!(outcome.data(), 5);
//! assert_eq!("missing".message(), "missing");
//! ```

pub mod ext;
pub mod fault;

pub use ext::{OptionExt, ResultExt};
pub use fault::Fault;
