//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::IgnoredMove;
use super::engine::GameEngine;
use super::error::EngineError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::{Position, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - a failure means the action is ignored
/// - Postcondition: {Q(state, action)} - must hold after applying the action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IgnoredMove>;

    /// Checks postconditions after applying the action.
    fn post(state: &S, action: &A) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark on the active snapshot.
///
/// Preconditions:
/// - Active board is still in progress
/// - Square must be empty
///
/// Postconditions:
/// - The new active snapshot is the last one in history
/// - It carries the mover's mark at the played position
/// - All history invariants hold
pub struct PlayContract;

impl Contract<GameEngine, Position> for PlayContract {
    #[instrument(skip(engine))]
    fn pre(engine: &GameEngine, pos: &Position) -> Result<(), IgnoredMove> {
        let outcome = engine.current_outcome();
        if outcome.is_over() {
            return Err(IgnoredMove::GameOver(outcome));
        }
        if !engine.current_board().is_empty(*pos) {
            return Err(IgnoredMove::SquareOccupied(*pos));
        }
        Ok(())
    }

    #[instrument(skip(engine))]
    fn post(engine: &GameEngine, pos: &Position) -> Result<(), EngineError> {
        if engine.current_move() + 1 != engine.history_len() {
            return Err(EngineError::InvariantViolation(
                "Played snapshot is not the last in history".to_string(),
            ));
        }

        let mover = engine.current_player().opponent();
        if engine.current_board().get(*pos) != Square::Occupied(mover) {
            return Err(EngineError::InvariantViolation(format!(
                "{} does not hold {}'s mark",
                pos, mover
            )));
        }

        HistoryInvariants::check_all(engine).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Outcome, Player};

    #[test]
    fn test_precondition_empty_square() {
        let engine = GameEngine::new();
        assert!(PlayContract::pre(&engine, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut engine = GameEngine::new();
        engine.play_at(Position::Center);
        assert_eq!(
            PlayContract::pre(&engine, &Position::Center),
            Err(IgnoredMove::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_finished_game() {
        let mut engine = GameEngine::new();
        for cell in [0, 3, 1, 4, 2] {
            engine.play(cell).unwrap();
        }
        assert_eq!(
            PlayContract::pre(&engine, &Position::BottomRight),
            Err(IgnoredMove::GameOver(Outcome::Win(Player::X)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut engine = GameEngine::new();
        engine.play_at(Position::Center);
        assert!(PlayContract::post(&engine, &Position::Center).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut engine = GameEngine::new();
        engine.play_at(Position::Center);

        // Replace the played snapshot with one that gained two marks
        engine.history[1] = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);

        assert!(matches!(
            PlayContract::post(&engine, &Position::Center),
            Err(EngineError::InvariantViolation(_))
        ));
    }
}
