//! Single-step invariant: each snapshot adds exactly one mark to its predecessor.

use super::super::{GameEngine, Position, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square goes from Empty to a mark. Marks are never removed or
/// overwritten, so every snapshot is reachable from the one before it.
pub struct SingleStepInvariant;

impl Invariant<GameEngine> for SingleStepInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().windows(2).all(|pair| {
            let mut changed = Position::ALL
                .into_iter()
                .filter(|pos| pair[0].get(*pos) != pair[1].get(*pos));

            match (changed.next(), changed.next()) {
                (Some(pos), None) => {
                    pair[0].get(pos) == Square::Empty && pair[1].get(pos) != Square::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn test_played_game_holds() {
        let mut engine = GameEngine::new();
        for cell in [4, 0, 8, 2] {
            engine.play(cell).unwrap();
        }
        assert!(SingleStepInvariant::holds(&engine));
    }

    #[test]
    fn test_duplicate_snapshot_violates() {
        let mut engine = GameEngine::new();
        engine.history.push(Board::new());
        assert!(!SingleStepInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut engine = GameEngine::new();
        engine.play_at(Position::Center);
        engine
            .history
            .push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!SingleStepInvariant::holds(&engine));
    }
}
