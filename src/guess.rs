//! Guess tracking against the true atom layout.

use crate::bitboard::CellSet;
use crate::board::Board;
use crate::cell::Cell;
use crate::common::{GameError, GuessResult};

/// Remembers which atoms were found and which cells were guessed wrongly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuessTracker {
    found: CellSet,
    wrong: CellSet,
}

impl GuessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_sets(found: CellSet, wrong: CellSet) -> Self {
        Self { found, wrong }
    }

    /// Check `cell` against the board. Only interior cells can be guessed.
    pub fn submit(&mut self, board: &Board, cell: Cell) -> Result<GuessResult, GameError> {
        if !cell.is_interior() {
            return Err(GameError::out_of_bounds(cell));
        }
        if board.has_atom(cell)? {
            self.found.insert(cell)?;
            return Ok(GuessResult {
                correct: true,
                is_new_wrong: false,
            });
        }
        let is_new_wrong = self.wrong.insert(cell)?;
        Ok(GuessResult {
            correct: false,
            is_new_wrong,
        })
    }

    /// Atoms guessed correctly at least once.
    pub fn found(&self) -> CellSet {
        self.found
    }

    /// Distinct cells guessed wrongly.
    pub fn wrong(&self) -> CellSet {
        self.wrong
    }

    pub fn atoms_left(&self, board: &Board) -> usize {
        (board.atoms() - self.found).len()
    }

    pub fn all_found(&self, board: &Board) -> bool {
        (board.atoms() - self.found).is_empty()
    }
}
