//! First-class move types.
//!
//! A [`Move`] is never stored by the engine; it is derived from the difference
//! between a snapshot and its predecessor.

use super::{Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a click was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredMove {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The active board is already decided.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

/// What [`crate::GameEngine::play`] did with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayResult {
    /// The move was applied and became the new active snapshot.
    Played(Move),
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl PlayResult {
    /// Returns true if the move was applied.
    pub fn is_played(&self) -> bool {
        matches!(self, PlayResult::Played(_))
    }

    /// Returns the applied move, if any.
    pub fn played(&self) -> Option<Move> {
        match self {
            PlayResult::Played(mv) => Some(*mv),
            PlayResult::Ignored(_) => None,
        }
    }
}
