//! Rule constants for the classical Black Box game.

/// Side length of the full grid, border ring included.
pub const BOARD_SIZE: u8 = 10;

/// Score a fresh session starts with.
pub const STARTING_SCORE: i32 = 25;

/// Deducted the first time a border cell is used as an entry or exit point.
pub const BORDER_POINT_COST: i32 = 1;

/// Deducted the first time a given cell is guessed wrongly.
pub const WRONG_GUESS_COST: i32 = 5;

/// Upper bound on ray engine steps: one per distinct `(cell, direction)` state.
pub const MAX_TRACE_STEPS: usize = 4 * (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Atom count used by the front end when none is requested.
pub const DEFAULT_ATOMS: usize = 4;

/// Number of interior cells (atoms may only live here).
pub const INTERIOR_CELLS: usize = (BOARD_SIZE as usize - 2) * (BOARD_SIZE as usize - 2);
