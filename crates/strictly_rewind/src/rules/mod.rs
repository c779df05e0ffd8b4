//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from history storage so the active
//! outcome is always recomputed from whichever snapshot is active.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, outcome};
pub use win::{LINES, check_winner, winning_line};
