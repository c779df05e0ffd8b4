//! Start invariant: history opens on the empty board and the cursor is in bounds.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: `history[0]` is the empty board and the active index points into history.
pub struct StartsEmptyInvariant;

impl Invariant<GameEngine> for StartsEmptyInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().first() == Some(&Board::new())
            && engine.current_move() < engine.history_len()
    }

    fn description() -> &'static str {
        "History starts with the empty board and the active index is in bounds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_holds() {
        assert!(StartsEmptyInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut engine = GameEngine::new();
        engine.current_move = 1;
        assert!(!StartsEmptyInvariant::holds(&engine));
    }
}
