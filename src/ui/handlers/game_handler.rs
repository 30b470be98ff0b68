//! Game command dispatch and cursor state.

use crate::{board::Location, command::Command, game::Status};

use super::super::{app::App, types::LogLevel};

/// Helper struct that turns UI actions into game commands.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Applies `command` to the game, logging what happened. Rejected commands change nothing.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let player = self.app.game.next_player();
        let applied = self.app.game.apply(command);

        if !applied {
            tracing::debug!(?command, "command ignored");
            return false;
        }

        match command {
            Command::Play(index) => {
                let location = Location::from_index(index, self.app.game.board_size());
                self.app.log(format!("{} plays {}", player, location));
                self.announce_result();
            }
            Command::JumpTo(move_index) => {
                self.app.log(format!("Jumped to move #{}", move_index));
            }
            Command::Resize(size) => {
                self.app.cursor = size * size / 2;
                self.app.size_input = size.to_string();
                self.app.log(format!("New {0}x{0} game", size));
            }
            Command::ToggleSort => {
                let order = if self.app.game.ascending() {
                    "ascending"
                } else {
                    "descending"
                };
                self.app.log(format!("Move list sorted {}", order));
            }
        }

        self.select_current_entry();
        true
    }

    fn announce_result(&mut self) {
        match self.app.game.status() {
            status @ (Status::Winner(_) | Status::Draw) => {
                self.app.log_at(LogLevel::Outcome, status.to_string())
            }
            Status::NextPlayer(_) => {}
        }
    }

    pub fn play_at_cursor(&mut self) -> bool {
        let cursor = self.app.cursor;
        self.dispatch(Command::Play(cursor))
    }

    /// Moves the board cursor, stopping at the edges.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let size = self.app.game.board_size() as isize;
        let row = (self.app.cursor as isize / size + d_row).clamp(0, size - 1);
        let col = (self.app.cursor as isize % size + d_col).clamp(0, size - 1);
        self.app.cursor = (row * size + col) as usize;
    }

    /// Moves the move-list selection by `delta` rows, stopping at the ends.
    pub fn move_selection(&mut self, delta: isize) {
        let last = self.app.game.history().len() as isize - 1;
        let selected = (self.app.selected_entry as isize + delta).clamp(0, last);
        self.app.selected_entry = selected as usize;
    }

    pub fn jump_to_selected(&mut self) -> bool {
        let entry = self
            .app
            .game
            .move_list()
            .get(self.app.selected_entry)
            .map(|e| e.move_index);

        match entry {
            Some(move_index) => self.dispatch(Command::JumpTo(move_index)),
            None => false,
        }
    }

    pub fn toggle_sort(&mut self) {
        self.dispatch(Command::ToggleSort);
    }

    /// Points the move-list selection at the current move.
    pub fn select_current_entry(&mut self) {
        if let Some(pos) = self.app.game.move_list().iter().position(|e| e.is_current) {
            self.app.selected_entry = pos;
        }
    }
}
