use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// One recorded snapshot together with the location of the move that made it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    location: Option<Location>,
}

impl HistoryEntry {
    const fn start() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// `None` only for the initial empty board.
    pub fn location(&self) -> Option<Location> {
        self.location
    }
}

/// Order in which history entries are listed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryOrder {
    Ascending,
    Descending,
}

impl HistoryOrder {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl Default for HistoryOrder {
    fn default() -> Self {
        Self::Ascending
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Winner(Mark),
    Draw,
    NextPlayer(Mark),
}

impl Status {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Winner(_) | Self::Draw)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(mark) => write!(f, "Winner: {mark}"),
            Self::Draw => f.write_str("Draw"),
            Self::NextPlayer(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlayOutcome {
    NoChange,
    Played,
    Won,
    Drawn,
}

impl PlayOutcome {
    pub const fn has_update(self) -> bool {
        use PlayOutcome::*;
        match self {
            NoChange => false,
            Played => true,
            Won => true,
            Drawn => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum JumpOutcome {
    NoChange,
    Moved,
}

impl JumpOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved => true,
        }
    }
}

/// Move history with a cursor into it.
///
/// `position` always addresses an entry of `history`, and `history` is never
/// empty. Winner and status are recomputed from the current snapshot on every
/// read instead of being cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    position: usize,
    order: HistoryOrder,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: alloc::vec![HistoryEntry::start()],
            position: 0,
            order: Default::default(),
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn entry(&self, position: usize) -> Option<&HistoryEntry> {
        self.history.get(position)
    }

    pub fn current_position(&self) -> usize {
        self.position
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.position].board
    }

    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// `X` on even positions, `O` on odd ones.
    pub fn next_mark(&self) -> Mark {
        if self.position % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        detect(self.current_board())
    }

    pub fn status(&self) -> Status {
        let board = self.current_board();
        match detect(board) {
            Some(line) => Status::Winner(line.mark),
            None if board.is_full() => Status::Draw,
            None => Status::NextPlayer(self.next_mark()),
        }
    }

    /// Entries paired with their chronological position, listed in the
    /// current display order.
    pub fn entries_in_order(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> + '_ {
        let len = self.history.len();
        let order = self.order;
        (0..len).map(move |i| {
            let position = match order {
                HistoryOrder::Ascending => i,
                HistoryOrder::Descending => len - 1 - i,
            };
            (position, &self.history[position])
        })
    }

    /// Places the next mark at `index`.
    ///
    /// Any entries after the current position are discarded before the new
    /// snapshot is appended. An occupied cell is `Ok(NoChange)`, a board that
    /// is already won is `Err(AlreadyEnded)`; neither changes the state.
    pub fn play(&mut self, index: CellIndex) -> Result<PlayOutcome> {
        let board = *self.current_board();
        let index = board.validate_index(index)?;
        self.check_not_won()?;

        if !board.is_empty_at(index) {
            return Ok(PlayOutcome::NoChange);
        }

        let mark = self.next_mark();
        let entry = HistoryEntry {
            board: board.with_mark(index, mark)?,
            location: Some(locate(index)?),
        };

        self.history.truncate(self.position + 1);
        self.history.push(entry);
        self.position = self.history.len() - 1;
        log::trace!("{mark} played {index} (history: {})", self.history.len());

        Ok(match self.status() {
            Status::Winner(_) => PlayOutcome::Won,
            Status::Draw => PlayOutcome::Drawn,
            Status::NextPlayer(_) => PlayOutcome::Played,
        })
    }

    /// Moves the cursor without touching the recorded history.
    pub fn jump_to(&mut self, position: usize) -> Result<JumpOutcome> {
        if position >= self.history.len() {
            return Err(GameError::InvalidPosition);
        }

        if position == self.position {
            return Ok(JumpOutcome::NoChange);
        }

        log::trace!("jump {} -> {}", self.position, position);
        self.position = position;
        Ok(JumpOutcome::Moved)
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// Discards all history and resets the display order.
    pub fn restart(&mut self) {
        log::trace!("restart after {} entries", self.history.len());
        *self = Self::new();
    }

    fn check_not_won(&self) -> Result<()> {
        if self.winning_line().is_some() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
