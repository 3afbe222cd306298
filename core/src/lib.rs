#![no_std]

extern crate alloc;

use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use rules::*;
pub use types::*;

mod engine;
mod error;
mod rules;
mod types;

/// A full 3x3 snapshot. Boards are plain values, every move produces a new one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if usize::from(index) < CELL_COUNT {
            Ok(index)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    /// Panics if `index` is out of range, check it with `validate_index` first.
    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        self[index].is_empty()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Marked(mark))
            .count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..CELL_COUNT as CellIndex).filter(|&index| self.is_empty_at(index))
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// The receiver is left untouched, so snapshots held in a history never
    /// change after they are recorded.
    pub fn with_mark(&self, index: CellIndex, mark: Mark) -> Result<Self> {
        let index = self.validate_index(index)?;
        let mut next = *self;
        next.cells[usize::from(index)] = Cell::Marked(mark);
        Ok(next)
    }
}

/// Indexing expects a valid `CellIndex`, see `Board::validate_index`.
impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Builds a board from a 9 character row-major picture, `.` is empty.
    pub(crate) fn board(picture: &str) -> Board {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, symbol) in cells.iter_mut().zip(picture.chars()) {
            *cell = match symbol {
                'X' => Cell::Marked(Mark::X),
                'O' => Cell::Marked(Mark::O),
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }
}
