//! Command implementations

pub mod sample;
pub mod simple;
pub mod validate;

pub use sample::{SamplingResult, run_sampling};
pub use simple::{Command, run_simple};
pub use validate::{DuplicateWord, ValidationReport, validate_groups};
