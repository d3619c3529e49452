//! Running score with charge-once deductions.

use log::{debug, warn};

use crate::bitboard::CellSet;
use crate::cell::Cell;
use crate::config::{BORDER_POINT_COST, STARTING_SCORE, WRONG_GUESS_COST};

/// Score accumulator. It trusts its caller to classify newness of guesses and
/// only ever lowers the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringLedger {
    score: i32,
    used_border: CellSet,
}

impl Default for ScoringLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringLedger {
    pub fn new() -> Self {
        Self {
            score: STARTING_SCORE,
            used_border: CellSet::new(),
        }
    }

    pub(crate) fn from_parts(score: i32, used_border: CellSet) -> Self {
        Self { score, used_border }
    }

    /// Deduct for `cell` the first time it is used; returns the amount deducted.
    pub fn charge_border_usage(&mut self, cell: Cell) -> i32 {
        debug_assert!(cell.is_border(), "charged non-border cell {}", cell);
        match self.used_border.insert(cell) {
            Ok(true) => self.deduct(BORDER_POINT_COST),
            Ok(false) => 0,
            Err(err) => {
                warn!("not charging {}: {}", cell, err);
                0
            }
        }
    }

    /// Deduct for a wrong guess iff it is the first at that cell.
    pub fn charge_wrong_guess(&mut self, is_new_wrong: bool) -> i32 {
        if is_new_wrong {
            self.deduct(WRONG_GUESS_COST)
        } else {
            0
        }
    }

    pub fn current_score(&self) -> i32 {
        self.score
    }

    /// Border cells already paid for.
    pub fn used_border(&self) -> CellSet {
        self.used_border
    }

    fn deduct(&mut self, points: i32) -> i32 {
        self.score -= points;
        debug!("deducted {} point(s), score now {}", points, self.score);
        points
    }
}
