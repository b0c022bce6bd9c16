use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("invalid cell marker {0:?}")]
pub struct InvalidCell(pub String);

/// A board square. On the wire an empty square is `""` and a taken one is its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Cell {
    #[default]
    Empty,
    Taken(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(mark) => Some(mark),
        }
    }

    pub fn as_str(self) -> &'static str {
        self.mark().map(Mark::as_str).unwrap_or("")
    }
}

impl From<Cell> for String {
    fn from(value: Cell) -> Self {
        value.as_str().to_string()
    }
}

impl TryFrom<String> for Cell {
    type Error = InvalidCell;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "" => Ok(Cell::Empty),
            "X" => Ok(Cell::Taken(Mark::X)),
            "O" => Ok(Cell::Taken(Mark::O)),
            _ => Err(InvalidCell(value)),
        }
    }
}

/// Square grid stored row-major. Serialized as a list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(Vec<Vec<Cell>>);

impl Board {
    pub fn empty(size: usize) -> Self {
        Self(vec![vec![Cell::Empty; size]; size])
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self(rows)
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.0.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.0.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Every square, row-major, with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, *cell))
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, _, cell)| !cell.is_empty())
    }

    /// True when `mark` fills any complete row, column or diagonal.
    pub fn has_line(&self, mark: Mark) -> bool {
        let size = self.size();
        if size == 0 {
            return false;
        }
        let owned = |row: usize, col: usize| self.get(row, col) == Some(Cell::Taken(mark));

        let any_row = (0..size).any(|row| (0..size).all(|col| owned(row, col)));
        let any_col = (0..size).any(|col| (0..size).all(|row| owned(row, col)));
        let main_diag = (0..size).all(|i| owned(i, i));
        let anti_diag = (0..size).all(|i| owned(i, size - 1 - i));

        any_row || any_col || main_diag || anti_diag
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub winner: Option<Mark>,
    pub is_draw: bool,
    #[serde(default)]
    pub current_player: Mark,
}

impl GameState {
    pub fn new(board_size: usize) -> Self {
        Self {
            board: Board::empty(board_size),
            winner: None,
            is_draw: false,
            current_player: Mark::X,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
