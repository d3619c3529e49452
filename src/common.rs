//! Common types for Black Box: game errors, ray outcomes and guess results.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::cell::Cell;

/// How a ray left (or failed to leave) the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RayKind {
    /// Absorbed by an atom; there is no exit point.
    Hit,
    /// Came back out through its own entry point.
    Reflection,
    /// Left through a different border cell after turning at least once.
    Detour,
    /// Passed straight through to the opposite border cell.
    Miss,
}

impl fmt::Display for RayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RayKind::Hit => "hit",
            RayKind::Reflection => "reflection",
            RayKind::Detour => "detour",
            RayKind::Miss => "miss",
        };
        f.write_str(name)
    }
}

/// Entry, exit and kind of a traced ray. The path itself is never part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RayOutcome {
    pub entry: Cell,
    pub exit: Option<Cell>,
    pub kind: RayKind,
}

impl RayOutcome {
    pub const fn hit(entry: Cell) -> Self {
        Self {
            entry,
            exit: None,
            kind: RayKind::Hit,
        }
    }

    /// Outcome for a ray leaving at `exit`; reflection is decided by `exit == entry` alone.
    pub fn exited(entry: Cell, exit: Cell, turned: bool) -> Self {
        let kind = if exit == entry {
            RayKind::Reflection
        } else if turned {
            RayKind::Detour
        } else {
            RayKind::Miss
        };
        Self {
            entry,
            exit: Some(exit),
            kind,
        }
    }
}

/// Result of a guess at an atom position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessResult {
    pub correct: bool,
    /// Set only the first time a given wrong cell is guessed.
    pub is_new_wrong: bool,
}

/// What exactly was wrong with an atom layout or a restored snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    /// Atom placed on a border, corner or off-grid cell.
    AtomNotInterior(Cell),
    /// Same cell listed twice.
    DuplicateAtom(Cell),
    /// More atoms requested than there are interior cells.
    TooManyAtoms(usize),
    /// Snapshot sets or score contradict each other.
    InconsistentState(&'static str),
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::AtomNotInterior(c) => write!(f, "atom at {} is not an interior cell", c),
            ConfigIssue::DuplicateAtom(c) => write!(f, "atom at {} listed more than once", c),
            ConfigIssue::TooManyAtoms(n) => write!(f, "{} atoms do not fit in the box", n),
            ConfigIssue::InconsistentState(why) => write!(f, "inconsistent session state: {}", why),
        }
    }
}

/// Errors returned by board, engine and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate is not valid for the requested operation.
    OutOfBounds { row: usize, col: usize },
    /// Bad atom placement at construction or restore.
    InvalidConfiguration(ConfigIssue),
    /// Ray trace ran past the step ceiling.
    EngineInvariantViolation { steps: usize },
}

impl GameError {
    pub(crate) const fn out_of_bounds(cell: Cell) -> Self {
        GameError::OutOfBounds {
            row: cell.row,
            col: cell.col,
        }
    }
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GameError::OutOfBounds { row, col },
            BitBoardError::BitsOutsideGrid { .. } => GameError::InvalidConfiguration(
                ConfigIssue::InconsistentState("cell set has bits outside the grid"),
            ),
        }
    }
}

impl From<ConfigIssue> for GameError {
    fn from(issue: ConfigIssue) -> Self {
        GameError::InvalidConfiguration(issue)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is out of bounds for this operation", row, col)
            }
            GameError::InvalidConfiguration(issue) => write!(f, "Invalid configuration: {}", issue),
            GameError::EngineInvariantViolation { steps } => {
                write!(f, "Ray trace exceeded {} steps without terminating", steps)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
