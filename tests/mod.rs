pub mod macros;
pub mod types;
