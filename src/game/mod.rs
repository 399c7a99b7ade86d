//! Puzzle gameplay
//!
//! Leaf-first: the word repository deals rounds, the layout shuffles slot
//! positions, the attempt counter tracks wrong guesses, and the controller
//! ties them together on top of a host [`BoardSurface`].

pub mod attempts;
pub mod controller;
pub mod layout;
pub mod repository;
pub mod selection;
pub mod surface;

pub use attempts::AttemptCounter;
pub use controller::{ClickOutcome, Evaluation, Phase, PuzzleController, QuitAction};
pub use layout::{BoardLayout, ShuffleTimings};
pub use repository::{GROUPS_PER_ROUND, RepositoryError, Round, WordSetRepository};
pub use selection::{Selection, SelectionEntry, Toggle};
pub use surface::{BoardSurface, GridSurface, SlotId, Tile};
