pub mod faults;
pub mod maybe;
pub mod outcome;
