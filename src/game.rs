use alloc::vec::Vec;

use log::{debug, info};

use crate::{
    bitboard::CellSet,
    board::Board,
    cell::Cell,
    common::{ConfigIssue, GameError, GuessResult, RayOutcome},
    config::STARTING_SCORE,
    guess::GuessTracker,
    ledger::ScoringLedger,
    ray,
};

/// Outcome of a shot together with the score after charging for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub outcome: RayOutcome,
    pub score: i32,
}

/// Result of a guess together with the score after charging for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessReport {
    pub result: GuessResult,
    pub score: i32,
}

/// One accepted move, as kept in the session log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Shot(ShotReport),
    Guess { cell: Cell, report: GuessReport },
}

/// Serializable snapshot of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub atoms: CellSet,
    pub used_border: CellSet,
    pub found: CellSet,
    pub wrong_guesses: CellSet,
    pub score: i32,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Solved,
}

/// One game of Black Box: the hidden board plus everything the player has spent.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    ledger: ScoringLedger,
    guesses: GuessTracker,
    history: Vec<Move>,
}

impl GameSession {
    /// Start a session with atoms at the given interior cells.
    pub fn new(atoms: &[Cell]) -> Result<Self, GameError> {
        Ok(Self::with_board(Board::new(atoms)?))
    }

    /// Start a session on an already validated board.
    pub fn with_board(board: Board) -> Self {
        info!("new session with {} atom(s)", board.atom_count());
        Self {
            board,
            ledger: ScoringLedger::new(),
            guesses: GuessTracker::new(),
            history: Vec::new(),
        }
    }

    /// Fire a ray from `entry` and charge for the border points it touches.
    pub fn shoot(&mut self, entry: Cell) -> Result<ShotReport, GameError> {
        let outcome = ray::trace(&self.board, entry)?;
        let mut charged = self.ledger.charge_border_usage(entry);
        if let Some(exit) = outcome.exit {
            charged += self.ledger.charge_border_usage(exit);
        }
        let report = ShotReport {
            outcome,
            score: self.ledger.current_score(),
        };
        debug!(
            "shot from {}: {} exit={:?} charged={} score={}",
            entry, outcome.kind, outcome.exit, charged, report.score
        );
        self.history.push(Move::Shot(report));
        Ok(report)
    }

    /// Guess that `cell` holds an atom and charge for a new wrong guess.
    pub fn guess(&mut self, cell: Cell) -> Result<GuessReport, GameError> {
        let result = self.guesses.submit(&self.board, cell)?;
        let charged = self.ledger.charge_wrong_guess(result.is_new_wrong);
        let report = GuessReport {
            result,
            score: self.ledger.current_score(),
        };
        debug!(
            "guess at {}: correct={} charged={} score={}",
            cell, result.correct, charged, report.score
        );
        self.history.push(Move::Guess { cell, report });
        if result.correct && self.is_solved() {
            info!("all atoms found, final score {}", report.score);
        }
        Ok(report)
    }

    /// True once every atom has been guessed correctly at least once.
    pub fn is_solved(&self) -> bool {
        self.guesses.all_found(&self.board)
    }

    pub fn status(&self) -> GameStatus {
        if self.is_solved() {
            GameStatus::Solved
        } else {
            GameStatus::InProgress
        }
    }

    /// The true atom layout, for end-of-game display.
    pub fn reveal_atoms(&self) -> CellSet {
        self.board.atoms()
    }

    pub fn score(&self) -> i32 {
        self.ledger.current_score()
    }

    /// Atoms not yet guessed.
    pub fn atoms_left(&self) -> usize {
        self.guesses.atoms_left(&self.board)
    }

    /// Border cells already used as an entry or exit point.
    pub fn used_border(&self) -> CellSet {
        self.ledger.used_border()
    }

    pub fn found(&self) -> CellSet {
        self.guesses.found()
    }

    pub fn wrong_guesses(&self) -> CellSet {
        self.guesses.wrong()
    }

    /// Moves accepted so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> SessionState {
        SessionState {
            atoms: self.board.atoms(),
            used_border: self.ledger.used_border(),
            found: self.guesses.found(),
            wrong_guesses: self.guesses.wrong(),
            score: self.ledger.current_score(),
        }
    }

    /// Restore a session from a snapshot, rejecting contradictory ones.
    /// The move log starts empty.
    pub fn from_state(state: SessionState) -> Result<Self, GameError> {
        let board = Board::from_set(state.atoms)?;
        let inconsistent = |why| GameError::from(ConfigIssue::InconsistentState(why));
        if !state.found.is_subset(&state.atoms) {
            return Err(inconsistent("found atoms missing from layout"));
        }
        if state.wrong_guesses.intersects(&state.atoms) {
            return Err(inconsistent("wrong guess on an atom cell"));
        }
        if state.wrong_guesses.iter().any(|c| !c.is_interior()) {
            return Err(inconsistent("wrong guess outside the interior"));
        }
        if state.used_border.iter().any(|c| !c.is_border()) {
            return Err(inconsistent("used point not on the border"));
        }
        if state.score > STARTING_SCORE {
            return Err(inconsistent("score above starting score"));
        }
        Ok(Self {
            board,
            ledger: ScoringLedger::from_parts(state.score, state.used_border),
            guesses: GuessTracker::from_sets(state.found, state.wrong_guesses),
            history: Vec::new(),
        })
    }

    /// Encode the snapshot with bincode.
    #[cfg(feature = "std")]
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(&self.state())?)
    }

    /// Decode and validate a bincode snapshot.
    #[cfg(feature = "std")]
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let state: SessionState = bincode::deserialize(bytes)?;
        GameSession::from_state(state).map_err(|e| anyhow::anyhow!(e))
    }
}
