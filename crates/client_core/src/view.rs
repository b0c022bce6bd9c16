//! Render model for the board. Rebuilt from scratch on every server response.

use std::fmt;

use shared::domain::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    /// Marker shown in the cell, empty when free.
    pub text: &'static str,
    pub taken: bool,
    /// Whether a click on this cell would be sent to the server.
    pub clickable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub size: usize,
    pub cells: Vec<CellView>,
}

impl BoardView {
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

pub fn render(state: &GameState) -> BoardView {
    let open = !state.is_over();
    let cells = state
        .board
        .cells()
        .map(|(row, col, cell)| CellView {
            row,
            col,
            text: cell.as_str(),
            taken: !cell.is_empty(),
            clickable: open && cell.is_empty(),
        })
        .collect();

    BoardView {
        size: state.board.size(),
        cells,
    }
}

/// Text announced once a game has finished.
pub fn outcome_message(state: &GameState) -> Option<String> {
    if let Some(winner) = state.winner {
        Some(format!("{winner} wins!"))
    } else if state.is_draw {
        Some("It's a draw!".to_string())
    } else {
        None
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = vec!["---"; self.size].join("+");
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f, "{separator}")?;
            }
            let line = row
                .iter()
                .map(|cell| format!(" {:1} ", cell.text))
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
