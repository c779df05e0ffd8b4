//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player, Position, Square};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The mark added between snapshots `i` and `i + 1` belongs to X when `i`
/// is even and to O when `i` is odd.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .windows(2)
            .enumerate()
            .all(|(index, pair)| {
                let expected = Square::Occupied(Player::to_move_at(index));
                Position::ALL.into_iter().any(|pos| {
                    pair[0].get(pos) == Square::Empty && pair[1].get(pos) == expected
                })
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 2, 6, 8] {
            engine.play(cell).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut engine = GameEngine::new();
        engine.play_at(Position::TopLeft);

        // X plays twice
        let twice = engine.current_board().with_mark(Position::Center, Player::X);
        engine.history.push(twice);

        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let mut engine = GameEngine::new();
        engine
            .history
            .push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
