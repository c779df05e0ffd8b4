//! Keyboard mapping.

use crossterm::event::KeyCode;
use strictly_rewind::Position;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the history selection.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Cursor direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Play at the board cursor.
    PlayCursor,
    /// Play a cell directly (0-8).
    PlayCell(usize),
    /// Switch focus between board and history.
    ToggleFocus,
    /// Select the previous history entry.
    SelectPrevious,
    /// Select the next history entry.
    SelectNext,
    /// Jump to the selected history entry.
    JumpSelected,
    /// Jump one snapshot back.
    StepBack,
    /// Jump one snapshot forward.
    StepForward,
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Maps a key to an action for the focused pane.
pub fn map_key(code: KeyCode, focus: Focus) -> Option<Action> {
    match (code, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Char('r'), _) => Some(Action::Restart),
        (KeyCode::Tab, _) => Some(Action::ToggleFocus),
        (KeyCode::Char('['), _) => Some(Action::StepBack),
        (KeyCode::Char(']'), _) => Some(Action::StepForward),
        (KeyCode::Char(c @ '1'..='9'), _) => c
            .to_digit(10)
            .map(|digit| Action::PlayCell(digit as usize - 1)),

        (KeyCode::Up, Focus::Board) => Some(Action::MoveCursor(Direction::Up)),
        (KeyCode::Down, Focus::Board) => Some(Action::MoveCursor(Direction::Down)),
        (KeyCode::Left, Focus::Board) => Some(Action::MoveCursor(Direction::Left)),
        (KeyCode::Right, Focus::Board) => Some(Action::MoveCursor(Direction::Right)),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Action::PlayCursor),

        (KeyCode::Up, Focus::History) => Some(Action::SelectPrevious),
        (KeyCode::Down, Focus::History) => Some(Action::SelectNext),
        (KeyCode::Enter, Focus::History) => Some(Action::JumpSelected),

        _ => None,
    }
}

/// Moves the cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(map_key(KeyCode::Char('1'), Focus::Board), Some(Action::PlayCell(0)));
        assert_eq!(map_key(KeyCode::Char('9'), Focus::History), Some(Action::PlayCell(8)));
        assert_eq!(map_key(KeyCode::Char('0'), Focus::Board), None);
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            map_key(KeyCode::Up, Focus::Board),
            Some(Action::MoveCursor(Direction::Up))
        );
        assert_eq!(map_key(KeyCode::Up, Focus::History), Some(Action::SelectPrevious));
        assert_eq!(map_key(KeyCode::Enter, Focus::History), Some(Action::JumpSelected));
        assert_eq!(map_key(KeyCode::Char(' '), Focus::History), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, Direction::Left), Position::BottomLeft);
        assert_eq!(move_cursor(Position::BottomLeft, Direction::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopRight, Direction::Right), Position::TopRight);
    }
}
