//! The rewindable game engine.
//!
//! History is a linear sequence of immutable board snapshots plus the index
//! of the active one. Turn and outcome are never stored; both are derived
//! from the active index and snapshot on every call, so jumping back to an
//! earlier position automatically revives a finished game.

use super::action::{Move, PlayResult};
use super::contracts::{Contract, PlayContract};
use super::error::EngineError;
use super::observer::{EngineEvent, EngineObserver};
use super::rules::{self, Outcome};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One entry in the list of jump targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Button label, see [`GameEngine::move_description`].
    pub description: String,
    /// Whether this is the active snapshot.
    pub is_current: bool,
}

/// Serializable view of an engine, for export collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Every snapshot from the empty board to the latest known move.
    pub history: Vec<Board>,
    /// Index of the active snapshot.
    pub current_move: usize,
}

/// Tic-tac-toe engine with a linear, rewindable history.
///
/// # Invariants
///
/// - `history[0]` is the empty board
/// - consecutive snapshots differ in exactly one square, Empty to a mark
/// - the mark added after index `i` belongs to [`Player::to_move_at`]`(i)`
/// - `current_move < history.len()`
pub struct GameEngine {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
    observers: Vec<Box<dyn EngineObserver>>,
}

impl GameEngine {
    /// Creates an engine positioned at the start of a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            observers: Vec::new(),
        }
    }

    /// Resets history to the empty board. Observers stay registered.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        debug!(discarded = self.history.len() - 1, "Resetting history");
        self.history.clear();
        self.history.push(Board::new());
        self.current_move = 0;
        self.emit(EngineEvent::Started);
    }

    /// Registers an observer notified after every successful mutation.
    pub fn subscribe(&mut self, observer: Box<dyn EngineObserver>) {
        self.observers.push(observer);
    }

    /// Returns the active snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Returns the player to move at the active snapshot.
    pub fn current_player(&self) -> Player {
        Player::to_move_at(self.current_move)
    }

    /// Returns the outcome of the active snapshot.
    pub fn current_outcome(&self) -> Outcome {
        rules::outcome(self.current_board())
    }

    /// Returns the completed line on the active snapshot, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_board())
    }

    /// Index of the active snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// All snapshots, including any ahead of the active one.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots in history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Plays the current player's mark at a raw cell index (0-8).
    ///
    /// Clicks on an occupied square or on a decided board are not errors:
    /// they return `Ok(PlayResult::Ignored(_))` and change nothing.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] when `cell_index > 8`.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, cell_index: usize) -> Result<PlayResult, EngineError> {
        let pos = Position::try_from(cell_index).inspect_err(|e| {
            warn!(error = %e, "Rejected play");
        })?;
        Ok(self.play_at(pos))
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// On success every snapshot after the active one is discarded before the
    /// new snapshot is appended and made active.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.current_player()))]
    pub fn play_at(&mut self, pos: Position) -> PlayResult {
        if let Err(reason) = PlayContract::pre(self, &pos) {
            debug!(%reason, "Ignoring click");
            return PlayResult::Ignored(reason);
        }

        let player = self.current_player();
        let next = self.current_board().with_mark(pos, player);

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future snapshots");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug_assert!(
            PlayContract::post(self, &pos).is_ok(),
            "play postcondition failed"
        );

        let mv = Move::new(player, pos);
        let outcome = self.current_outcome();
        debug!(%mv, %outcome, "Move applied");
        self.emit(EngineEvent::Played {
            move_number: self.current_move,
            mv,
            outcome,
        });
        PlayResult::Played(mv)
    }

    /// Makes `move_index` the active snapshot without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MoveOutOfRange`] when `move_index` is not a
    /// valid history index. The active snapshot is left unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), EngineError> {
        if move_index >= self.history.len() {
            let err = EngineError::MoveOutOfRange {
                index: move_index,
                len: self.history.len(),
            };
            warn!(error = %err, "Rejected jump");
            return Err(err);
        }

        let from = self.current_move;
        self.current_move = move_index;
        if from != move_index {
            self.emit(EngineEvent::Jumped {
                from,
                to: move_index,
            });
        }
        Ok(())
    }

    /// Label for the jump target at `move_index`.
    pub fn move_description(move_index: usize) -> String {
        if move_index > 0 {
            format!("Go to move #{}", move_index)
        } else {
            "Go to game start".to_string()
        }
    }

    /// Status line for the active snapshot.
    pub fn status_text(&self) -> String {
        match self.current_outcome() {
            Outcome::Win(winner) => format!("Winner: {}", winner),
            Outcome::Tie => "It's a Tie!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.current_player()),
        }
    }

    /// The move that produced snapshot `move_index`.
    ///
    /// Returns `None` for the empty starting board and for indices past the
    /// end of history.
    pub fn move_at(&self, move_index: usize) -> Option<Move> {
        if move_index == 0 {
            return None;
        }
        let before = self.history.get(move_index - 1)?;
        let after = self.history.get(move_index)?;
        Position::ALL.into_iter().find_map(|pos| {
            match (before.get(pos).player(), after.get(pos).player()) {
                (None, Some(player)) => Some(Move::new(player, pos)),
                _ => None,
            }
        })
    }

    /// Jump targets for every snapshot, oldest first.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|index| MoveEntry {
                index,
                description: Self::move_description(index),
                is_current: index == self.current_move,
            })
            .collect()
    }

    /// Copies history and the active index into a serializable record.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            history: self.history.clone(),
            current_move: self.current_move,
        }
    }

    fn emit(&mut self, event: EngineEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("history", &self.history)
            .field("current_move", &self.current_move)
            .field("observers", &self.observers.len())
            .finish()
    }
}
