//! Interactive TUI interface
//!
//! The tile board lives in a [`GridSurface`](crate::game::GridSurface); this
//! module draws it with ratatui and turns mouse clicks into slot and button
//! presses.

mod app;
pub mod layout;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use layout::Button;
