use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::game::GameState;

use super::{
    handlers::InputHandler,
    types::{Focus, LogBuffer, LogLevel},
};

/// Main application state container.
pub struct App {
    pub(in crate::ui) game: GameState,
    /// Board index under the cursor.
    pub(in crate::ui) cursor: usize,
    pub(in crate::ui) focus: Focus,
    /// Row of the move list under the selection, in display order.
    pub(in crate::ui) selected_entry: usize,
    pub(in crate::ui) size_input: String,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(game: GameState, logs: LogBuffer) -> Self {
        let size_input = game.board_size().to_string();
        let center = game.board_size() * game.board_size() / 2;

        Self {
            game,
            cursor: center,
            focus: Focus::Board,
            selected_entry: 0,
            size_input,
            logs,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!(size = self.game.board_size(), "UI started");
        self.log(format!("New {0}x{0} game", self.game.board_size()));

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && InputHandler::new(self).handle_key(key)
            {
                return Ok(());
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        self.log_at(LogLevel::Info, msg);
    }

    pub(in crate::ui) fn log_at(&self, level: LogLevel, msg: impl Into<String> + Display) {
        match level {
            LogLevel::Rejected => tracing::warn!("{}", &msg),
            LogLevel::Info | LogLevel::Outcome => tracing::info!("{}", &msg),
        }
        self.logs.push_at(level, msg.into());
    }
}
