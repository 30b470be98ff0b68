//! Game state: move history, current move pointer and board size.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::{
    board::{Cell, DEFAULT_BOARD_SIZE, Location, Player, empty_board, is_valid_board_size},
    win::{Win, evaluate},
};

/// One entry of the history: the board right after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub board: Vec<Cell>,
    /// `None` only for the pre-game snapshot at index 0.
    pub location: Option<Location>,
    pub index: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Winner(Player),
    Draw,
    NextPlayer(Player),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(p) => write!(f, "Winner: {}", p),
            Status::Draw => write!(f, "Draw"),
            Status::NextPlayer(p) => write!(f, "Next player: {}", p),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    pub move_index: usize,
    pub location: Option<Location>,
    pub is_current: bool,
    pub description: String,
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub board: Vec<Cell>,
    pub board_size: usize,
    pub status: Status,
    pub winning_line: Vec<usize>,
    pub move_list: Vec<MoveEntry>,
    pub current_move: usize,
    pub ascending: bool,
}

#[derive(Debug, Clone)]
pub struct GameState {
    history: Vec<Move>,
    current_move: usize,
    board_size: usize,
    ascending: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl GameState {
    /// Creates a fresh game. Out-of-range sizes fall back to the default.
    pub fn new(board_size: usize) -> Self {
        let board_size = if is_valid_board_size(board_size) {
            board_size
        } else {
            DEFAULT_BOARD_SIZE
        };

        Self {
            history: vec![initial_move(board_size)],
            current_move: 0,
            board_size,
            ascending: true,
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn current_board(&self) -> &[Cell] {
        &self.history[self.current_move].board
    }

    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    pub fn winner(&self) -> Option<Win> {
        evaluate(self.current_board(), self.board_size)
    }

    pub fn status(&self) -> Status {
        if let Some(win) = self.winner() {
            Status::Winner(win.winner)
        } else if self.current_board().iter().all(|c| !c.is_empty()) {
            Status::Draw
        } else {
            Status::NextPlayer(self.next_player())
        }
    }

    /// Marks `index` for the player to move. Returns whether anything changed.
    ///
    /// Playing from an earlier point in history drops every later move first.
    pub fn play(&mut self, index: usize) -> bool {
        let board = self.current_board();

        match board.get(index) {
            None => {
                debug!(index, "play rejected: index out of range");
                return false;
            }
            Some(Cell::Taken(_)) => {
                debug!(index, "play rejected: cell occupied");
                return false;
            }
            Some(Cell::Empty) => {}
        }

        if self.winner().is_some() {
            debug!(index, "play rejected: game already won");
            return false;
        }

        let player = self.next_player();
        let mut next = board.to_vec();
        next[index] = Cell::Taken(player);

        let dropped = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);

        let move_index = self.history.len();
        let location = Location::from_index(index, self.board_size);
        self.history.push(Move {
            board: next,
            location: Some(location),
            index: move_index,
        });
        self.current_move = move_index;

        debug!(%player, index, %location, move_index, dropped, "move played");
        true
    }

    pub fn jump_to(&mut self, move_index: usize) -> bool {
        if move_index >= self.history.len() {
            debug!(move_index, len = self.history.len(), "jump rejected");
            return false;
        }

        self.current_move = move_index;
        debug!(move_index, "jumped");
        true
    }

    /// Starts over on an empty board of `new_size`. Sizes of 2 or less, or
    /// above `MAX_BOARD_SIZE`, are ignored.
    pub fn resize(&mut self, new_size: usize) -> bool {
        if !is_valid_board_size(new_size) {
            debug!(new_size, "resize rejected");
            return false;
        }

        self.board_size = new_size;
        self.history = vec![initial_move(new_size)];
        self.current_move = 0;
        debug!(new_size, "board resized");
        true
    }

    pub fn toggle_sort(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "sort order toggled");
    }

    /// History rows in display order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .iter()
            .map(|mv| {
                let is_current = mv.index == self.current_move;
                MoveEntry {
                    move_index: mv.index,
                    location: mv.location,
                    is_current,
                    description: describe(mv, is_current),
                }
            })
            .collect();

        if !self.ascending {
            entries.reverse();
        }
        entries
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.current_board().to_vec(),
            board_size: self.board_size,
            status: self.status(),
            winning_line: self.winner().map(|w| w.line).unwrap_or_default(),
            move_list: self.move_list(),
            current_move: self.current_move,
            ascending: self.ascending,
        }
    }
}

fn initial_move(size: usize) -> Move {
    Move {
        board: empty_board(size),
        location: None,
        index: 0,
    }
}

fn describe(mv: &Move, is_current: bool) -> String {
    let location = mv.location.map(|l| l.to_string()).unwrap_or_default();

    if is_current {
        format!("You are at move #{} {}", mv.index, location)
            .trim_end()
            .to_string()
    } else if mv.index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{} {}", mv.index, location)
    }
}
