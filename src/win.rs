//! Win detection on an N×N board.

use serde::Serialize;

use crate::board::{Cell, Player};

/// Longest line ever required to win, whatever the board size.
pub const MAX_WIN_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Win {
    pub winner: Player,
    /// Board indices of the winning cells, starting at the scanned origin.
    pub line: Vec<usize>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
    MainDiagonal,
    AntiDiagonal,
}

/// Scan order for every candidate line start.
const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::MainDiagonal,
    Direction::AntiDiagonal,
];

impl Direction {
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::MainDiagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    fn fits(self, row: usize, col: usize, size: usize, len: usize) -> bool {
        let fits_right = col + len <= size;
        let fits_down = row + len <= size;
        match self {
            Direction::Horizontal => fits_right,
            Direction::Vertical => fits_down,
            Direction::MainDiagonal => fits_down && fits_right,
            Direction::AntiDiagonal => fits_down && col + 1 >= len,
        }
    }
}

pub fn win_length(size: usize) -> usize {
    size.min(MAX_WIN_LENGTH)
}

/// Returns the first winning line found on `board`, or `None`.
///
/// Cells are visited in row-major order and each occupied cell is tried as
/// the start of a horizontal, vertical, main-diagonal and anti-diagonal line,
/// in that order. When several lines exist only the first one scanned is
/// reported. A full board without a line is a draw, which is left to the
/// caller.
pub fn evaluate(board: &[Cell], size: usize) -> Option<Win> {
    if size == 0 || size.checked_mul(size) != Some(board.len()) {
        return None;
    }

    let len = win_length(size);

    for row in 0..size {
        for col in 0..size {
            let Cell::Taken(player) = board[row * size + col] else {
                continue;
            };

            for direction in DIRECTIONS {
                if !direction.fits(row, col, size, len) {
                    continue;
                }
                if let Some(line) = line_from(board, size, row, col, direction, len, player) {
                    return Some(Win {
                        winner: player,
                        line,
                    });
                }
            }
        }
    }

    None
}

fn line_from(
    board: &[Cell],
    size: usize,
    row: usize,
    col: usize,
    direction: Direction,
    len: usize,
    player: Player,
) -> Option<Vec<usize>> {
    let (dr, dc) = direction.step();
    let mut line = Vec::with_capacity(len);

    for k in 0..len as isize {
        // `fits` already bounds every step inside the board
        let r = (row as isize + dr * k) as usize;
        let c = (col as isize + dc * k) as usize;
        let index = r * size + c;
        if board[index] != Cell::Taken(player) {
            return None;
        }
        line.push(index);
    }

    Some(line)
}
