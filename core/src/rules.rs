use serde::{Deserialize, Serialize};

use crate::*;

/// Three cell indices that win when they all hold the same mark.
pub type Line = [CellIndex; 3];

/// Every winning line: rows top to bottom, columns left to right, then the
/// two diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: Line,
}

impl WinningLine {
    pub fn contains(&self, index: CellIndex) -> bool {
        self.cells.contains(&index)
    }
}

/// Finds the first line fully occupied by a single mark.
///
/// A full board without a winning line is a draw, that is left to the caller.
pub fn detect(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&cells| {
        let [a, b, c] = cells;
        match board[a] {
            Cell::Marked(mark) if board[b] == board[a] && board[c] == board[a] => {
                Some(WinningLine { mark, cells })
            }
            _ => None,
        }
    })
}

/// Converts a cell index into its 1-based `(row, col)`.
pub fn locate(index: CellIndex) -> Result<Location> {
    if usize::from(index) >= CELL_COUNT {
        return Err(GameError::InvalidCell);
    }

    Ok(Location {
        row: index / BOARD_SIZE + 1,
        col: index % BOARD_SIZE + 1,
    })
}
