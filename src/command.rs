//! Typed commands for every user action, and their textual form.

use anyhow::{Context, Result};
use std::str::FromStr;

use crate::{board::is_valid_board_size, game::GameState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    JumpTo(usize),
    Resize(usize),
    ToggleSort,
}

impl GameState {
    /// Dispatches `command` to the matching operation. Returns whether the state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Play(index) => self.play(index),
            Command::JumpTo(move_index) => self.jump_to(move_index),
            Command::Resize(size) => self.resize(size),
            Command::ToggleSort => {
                self.toggle_sort();
                true
            }
        }
    }
}

/// Parses raw size input. Only integers from 3 to `MAX_BOARD_SIZE` are accepted.
pub fn parse_board_size(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|&size| is_valid_board_size(size))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    /// Accepts `play N`, `jump N`, `resize N` and `sort`.
    fn from_str(line: &str) -> Result<Self> {
        let parts: Vec<_> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["sort"] => Ok(Command::ToggleSort),
            [verb, arg] => {
                let n: usize = arg
                    .parse()
                    .with_context(|| format!("invalid number {:?} in {:?}", arg, line))?;
                match *verb {
                    "play" => Ok(Command::Play(n)),
                    "jump" => Ok(Command::JumpTo(n)),
                    "resize" => Ok(Command::Resize(n)),
                    _ => Err(anyhow::anyhow!("unknown command: {}", verb)),
                }
            }
            _ => Err(anyhow::anyhow!("expected: play N | jump N | resize N | sort")),
        }
    }
}

/// Parses a script of commands, one per line. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| {
            line.parse::<Command>()
                .with_context(|| format!("line {}", i + 1))
        })
        .collect()
}

/// Parses a comma-separated list of cell indices into play commands.
pub fn parse_moves(list: &str) -> Result<Vec<Command>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map(Command::Play)
                .with_context(|| format!("invalid cell index: {:?}", s))
        })
        .collect()
}
