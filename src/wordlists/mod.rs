//! Word pools for the puzzle
//!
//! Provides the built-in pool compiled into the binary and loaders for custom
//! pool files.

mod embedded;
pub mod loader;

pub use embedded::{GROUPS, GROUPS_COUNT};
