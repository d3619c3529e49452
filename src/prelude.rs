//! Commonly used types and utilities for ease of import.

pub use crate::{
    border_cells, trace, Board, Cell, CellSet, Direction, GameError, GameSession, GameStatus,
    GuessResult, RayKind, RayOutcome,
};
