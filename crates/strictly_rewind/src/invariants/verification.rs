//! Formal verification of the rules using the Kani model checker.
//!
//! These proof harnesses check properties for every possible board,
//! reachable or not.

use crate::{Board, Player, Square, check_winner, outcome, winning_line, Outcome};

fn any_square() -> Square {
    match kani::any::<u8>() % 3 {
        0 => Square::Empty,
        1 => Square::Occupied(Player::X),
        _ => Square::Occupied(Player::O),
    }
}

fn any_board() -> Board {
    Board::from_squares(std::array::from_fn(|_| any_square()))
}

/// A reported winner always owns a uniformly marked line.
#[kani::proof]
#[kani::unwind(10)]
fn verify_winner_owns_line() {
    let board = any_board();

    if let Some(winner) = check_winner(&board) {
        let line = winning_line(&board).expect("winner implies a line");
        for pos in line {
            assert_eq!(board.get(pos), Square::Occupied(winner));
        }
    }
}

/// A tie is only reported on a full board without a winner.
#[kani::proof]
#[kani::unwind(10)]
fn verify_tie_requires_full_board() {
    let board = any_board();

    if outcome(&board) == Outcome::Tie {
        assert!(board.is_full());
        assert!(check_winner(&board).is_none());
    }
}
