//! Strictly Rewind - tic-tac-toe with a rewindable move history.
//!
//! The crate holds the whole rules engine. A presentation layer reads the
//! active snapshot and status text from a [`GameEngine`], and forwards cell
//! clicks and history jumps back into it.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], and the immutable [`Board`] snapshot
//! - **Position**: typed cell indices with row-major numbering
//! - **Rules**: pure win, draw and [`Outcome`] detection
//! - **Engine**: the linear history of snapshots plus the active position
//! - **Contracts / Invariants**: pre/postconditions checked around every move
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.play(4)?;
//! assert_eq!(engine.current_player(), Player::O);
//! assert_eq!(engine.status_text(), "Next player: O");
//!
//! engine.jump_to(0)?;
//! assert_eq!(engine.current_player(), Player::X);
//! assert_eq!(engine.history_len(), 2);
//! # Ok::<(), strictly_rewind::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod error;
mod invariants;
mod observer;
mod position;
mod rules;
mod types;

pub use action::{IgnoredMove, Move, PlayResult};
pub use contracts::{Contract, PlayContract};
pub use engine::{GameEngine, GameRecord, MoveEntry};
pub use error::EngineError;
pub use invariants::{
    AlternatingTurnInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleStepInvariant, StartsEmptyInvariant,
};
pub use observer::{EngineEvent, EngineObserver, TracingObserver};
pub use position::Position;
pub use rules::{LINES, Outcome, check_winner, is_draw, is_full, outcome, winning_line};
pub use types::{Board, Player, Square};
