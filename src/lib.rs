//! Connections Puzzle
//!
//! A word-grouping puzzle: sixteen words are dealt onto a 4x4 board and the
//! player finds the four hidden groups of four.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use connections_puzzle::config::GameConfig;
//! use connections_puzzle::game::{GridSurface, PuzzleController, WordSetRepository};
//! use connections_puzzle::wordlists::{GROUPS, loader::groups_from_slice};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let repository = WordSetRepository::new(groups_from_slice(GROUPS));
//! let mut controller = PuzzleController::new(
//!     repository,
//!     GridSurface::new(4, 4),
//!     GameConfig::default(),
//!     StdRng::seed_from_u64(7),
//! );
//! controller.setup_round().unwrap();
//! controller.settle();
//!
//! let slot = controller.slot_for_word("cat").unwrap_or(0);
//! controller.on_slot_clicked(slot);
//! println!("{}", controller.attempts().label());
//! ```

// Core domain types
pub mod core;

// Gameplay: rounds, selection, shuffling
pub mod game;

// Word pools
pub mod wordlists;

// Game configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
