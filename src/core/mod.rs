//! Core domain types for the puzzle
//!
//! Plain values with no host or randomness dependencies: groups, positions,
//! fill colors and frame-advanced timers.

mod fill;
mod group;
mod position;
mod timer;

pub use fill::{GroupColor, SlotFill};
pub use group::{GROUP_SIZE, GroupError, WordGroup};
pub use position::Position;
pub use timer::{Timer, normalized_progress};
