//! Keyboard handling and size input validation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    board::MIN_BOARD_SIZE,
    command::{Command, parse_board_size},
};

use super::super::{
    app::App,
    types::{Focus, InputStatus, LogLevel},
};
use super::GameHandler;

/// Longest size input accepted, in characters.
const MAX_SIZE_DIGITS: usize = 3;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Handles one key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q' | 'c' | 'C'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }
            (KeyCode::Tab, _) => {
                self.app.focus = self.app.focus.next();
                return false;
            }
            (KeyCode::BackTab, _) => {
                self.app.focus = self.app.focus.next().next();
                return false;
            }
            _ => {}
        }

        match self.app.focus {
            Focus::Board => return self.handle_board_key(key),
            Focus::Moves => self.handle_moves_key(key),
            Focus::SizeInput => self.handle_size_key(key),
        }
        false
    }

    fn handle_board_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.app.log("Exit requested");
                return true;
            }
            KeyCode::Up | KeyCode::Char('k') => GameHandler::new(self.app).move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => GameHandler::new(self.app).move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => GameHandler::new(self.app).move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => GameHandler::new(self.app).move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                GameHandler::new(self.app).play_at_cursor();
            }
            KeyCode::Char('s' | 'S') => GameHandler::new(self.app).toggle_sort(),
            _ => {}
        }
        false
    }

    fn handle_moves_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => GameHandler::new(self.app).move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => GameHandler::new(self.app).move_selection(1),
            KeyCode::Home => GameHandler::new(self.app).move_selection(isize::MIN / 2),
            KeyCode::End => GameHandler::new(self.app).move_selection(isize::MAX / 2),
            KeyCode::Enter | KeyCode::Char(' ') => {
                GameHandler::new(self.app).jump_to_selected();
            }
            KeyCode::Char('s' | 'S') => GameHandler::new(self.app).toggle_sort(),
            KeyCode::Esc => self.app.focus = Focus::Board,
            _ => {}
        }
    }

    fn handle_size_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.app.size_input.len() < MAX_SIZE_DIGITS {
                    self.app.size_input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.app.size_input.pop();
            }
            KeyCode::Enter => self.submit_size(),
            KeyCode::Esc => {
                self.app.size_input = self.app.game.board_size().to_string();
                self.app.focus = Focus::Board;
            }
            _ => {}
        }
    }

    fn submit_size(&mut self) {
        match parse_board_size(&self.app.size_input) {
            Some(size) => {
                GameHandler::new(self.app).dispatch(Command::Resize(size));
                self.app.focus = Focus::Board;
            }
            None => {
                let msg = format!("Size rejected: {:?}", self.app.size_input);
                self.app.log_at(LogLevel::Rejected, msg);
            }
        }
    }
}

/// Validation status of raw size input, for display next to the field.
pub fn size_input_status(raw: &str) -> InputStatus {
    let raw = raw.trim();

    if raw.is_empty() {
        return InputStatus::Incomplete;
    }

    match parse_board_size(raw) {
        Some(size) => InputStatus::Valid(size),
        None => match raw.parse::<usize>() {
            Ok(size) if size < MIN_BOARD_SIZE => InputStatus::Invalid("minimum size is 3"),
            Ok(_) => InputStatus::Invalid("maximum size is 99"),
            Err(_) => InputStatus::Invalid("not a number"),
        },
    }
}
