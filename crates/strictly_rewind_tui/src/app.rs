//! Application state and logic.
//!
//! The app owns a [`GameEngine`] and translates decoded key actions into
//! engine calls. It holds no game rules of its own.

use crate::input::{self, Action, Focus};
use std::cell::RefCell;
use std::rc::Rc;
use strictly_rewind::{EngineEvent, GameEngine, PlayResult, Position, TracingObserver};
use tracing::{debug, instrument, warn};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Rc<RefCell<String>>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(show_help: bool) -> Self {
        let mut engine = GameEngine::new();
        let message = Rc::new(RefCell::new("Player X starts.".to_string()));

        engine.subscribe(Box::new(TracingObserver));
        let sink = Rc::clone(&message);
        engine.subscribe(Box::new(move |event: &EngineEvent| {
            *sink.borrow_mut() = describe(event);
        }));

        Self {
            engine,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message,
            show_help,
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the last event message.
    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    /// Whether the help line is rendered.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a decoded action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::PlayCursor => self.play(self.cursor.to_index()),
            Action::PlayCell(cell) => {
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                self.play(cell);
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.engine.current_move();
            }
            Action::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::SelectNext => {
                if self.selected + 1 < self.engine.history_len() {
                    self.selected += 1;
                }
            }
            Action::JumpSelected => self.jump(self.selected),
            Action::StepBack => {
                if let Some(target) = self.engine.current_move().checked_sub(1) {
                    self.jump(target);
                }
            }
            Action::StepForward => {
                let target = self.engine.current_move() + 1;
                if target < self.engine.history_len() {
                    self.jump(target);
                }
            }
            Action::Restart => {
                self.engine.start();
                self.cursor = Position::Center;
                self.selected = 0;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn play(&mut self, cell: usize) {
        match self.engine.play(cell) {
            Ok(PlayResult::Played(_)) => {
                self.selected = self.engine.current_move();
            }
            Ok(PlayResult::Ignored(reason)) => {
                *self.message.borrow_mut() = reason.to_string();
            }
            Err(e) => {
                warn!(error = %e, "Play rejected");
                *self.message.borrow_mut() = e.to_string();
            }
        }
    }

    fn jump(&mut self, target: usize) {
        match self.engine.jump_to(target) {
            Ok(()) => self.selected = self.engine.current_move(),
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                *self.message.borrow_mut() = e.to_string();
            }
        }
    }
}

/// One-line summary of an engine event for the message bar.
fn describe(event: &EngineEvent) -> String {
    match event {
        EngineEvent::Started => "New game. Player X starts.".to_string(),
        EngineEvent::Played { move_number, mv, .. } => {
            format!("Move #{}: {} played {}", move_number, mv.player, mv.position)
        }
        EngineEvent::Jumped { to, .. } => GameEngine::move_description(*to)
            .replacen("Go to", "Viewing", 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use strictly_rewind::{Player, Square};

    #[test]
    fn test_cursor_play_uses_engine() {
        let mut app = App::new(true);
        app.handle(Action::MoveCursor(Direction::Up));
        app.handle(Action::PlayCursor);

        let board = app.engine().current_board();
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::X));
        assert_eq!(app.message(), "Move #1: X played Top-center");
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_ignored_click_reports_reason() {
        let mut app = App::new(true);
        app.handle(Action::PlayCell(4));
        app.handle(Action::PlayCell(4));

        assert_eq!(app.engine().history_len(), 2);
        assert_eq!(app.message(), "Square Center is already occupied");
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut app = App::new(true);
        app.handle(Action::PlayCell(0));
        app.handle(Action::PlayCell(1));

        app.handle(Action::StepBack);
        assert_eq!(app.engine().current_move(), 1);
        assert_eq!(app.message(), "Viewing move #1");

        app.handle(Action::StepForward);
        app.handle(Action::StepForward);
        assert_eq!(app.engine().current_move(), 2);

        app.handle(Action::StepBack);
        app.handle(Action::StepBack);
        app.handle(Action::StepBack);
        assert_eq!(app.engine().current_move(), 0);
        assert_eq!(app.message(), "Viewing game start");
    }

    #[test]
    fn test_history_selection_jumps() {
        let mut app = App::new(true);
        for cell in [0, 4, 8] {
            app.handle(Action::PlayCell(cell));
        }
        app.handle(Action::ToggleFocus);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 3);

        app.handle(Action::SelectNext);
        assert_eq!(app.selected(), 3);
        app.handle(Action::SelectPrevious);
        app.handle(Action::SelectPrevious);
        app.handle(Action::JumpSelected);

        assert_eq!(app.engine().current_move(), 1);
        assert_eq!(app.engine().history_len(), 4);
        assert_eq!(app.engine().current_player(), Player::O);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(false);
        app.handle(Action::PlayCell(2));
        app.handle(Action::Restart);

        assert_eq!(app.engine().history_len(), 1);
        assert_eq!(app.message(), "New game. Player X starts.");
        assert!(!app.should_quit());

        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
