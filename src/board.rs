use anyhow::Result;
use serde::Serialize;
use std::fmt;

/// Smallest side length a board may have.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest side length a board may have.
pub const MAX_BOARD_SIZE: usize = 99;

pub const DEFAULT_BOARD_SIZE: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Player to move at history index `move_index`. X opens the game.
    pub fn for_move(move_index: usize) -> Self {
        if move_index % 2 == 0 { Player::X } else { Player::O }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "Option<Player>")]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }

    pub fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
    }
}

impl From<Cell> for Option<Player> {
    fn from(cell: Cell) -> Self {
        cell.player()
    }
}

impl TryFrom<char> for Cell {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'X' => Ok(Cell::Taken(Player::X)),
            'O' => Ok(Cell::Taken(Player::O)),
            '.' | '-' | '_' => Ok(Cell::Empty),
            _ => Err(value),
        }
    }
}

/// 1-indexed board coordinates, as shown in the move list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size + 1,
            col: index % size + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub fn is_valid_board_size(size: usize) -> bool {
    (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
}

pub fn empty_board(size: usize) -> Vec<Cell> {
    vec![Cell::Empty; size * size]
}

/// Parses a board written row by row, e.g. `"XOX/OXO/..."`.
///
/// Rows are separated by `/` or whitespace and must all have the same
/// length as the number of rows. Returns the cells and the side length.
pub fn parse_board(pattern: &str) -> Result<(Vec<Cell>, usize)> {
    let rows: Vec<&str> = pattern
        .split(|c: char| c == '/' || c.is_whitespace())
        .filter(|r| !r.is_empty())
        .collect();

    let size = rows.len();
    if !is_valid_board_size(size) {
        return Err(anyhow::anyhow!(
            "board needs {} to {} rows, got {}",
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE,
            size
        ));
    }

    let mut cells = Vec::with_capacity(size * size);
    for (i, row) in rows.iter().enumerate() {
        if row.chars().count() != size {
            return Err(anyhow::anyhow!(
                "row {} has {} cells, expected {}",
                i + 1,
                row.chars().count(),
                size
            ));
        }
        for c in row.chars() {
            let cell = Cell::try_from(c)
                .map_err(|bad| anyhow::anyhow!("invalid board character: {}", bad))?;
            cells.push(cell);
        }
    }

    Ok((cells, size))
}
