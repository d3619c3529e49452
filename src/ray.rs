//! Ray engine: traces a ray through the box from a border entry point.
//!
//! A trace is an explicit state machine over `(position, heading)`. The ray
//! starts on its entry border cell and, on each step, looks at the cell ahead
//! and at the two cells diagonally ahead of it:
//!
//! * an atom straight ahead absorbs the ray;
//! * atoms on both diagonals reverse it, an atom on one diagonal turns it 90°
//!   away from that atom, and in both cases the ray does not move;
//! * otherwise it advances, and leaves the box once it reaches a border cell.
//!
//! Any turn taken while still on the entry cell reflects the ray straight back.

use alloc::vec::Vec;

use log::error;

use crate::board::Board;
use crate::cell::{Cell, Direction};
use crate::common::{GameError, RayOutcome};
use crate::config::MAX_TRACE_STEPS;

/// Full record of a trace, for diagnostics. Scoring only ever sees [`RayOutcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RayTrace {
    pub outcome: RayOutcome,
    /// Cells occupied in order, from the entry cell to the exit cell (if any).
    pub path: Vec<Cell>,
    /// Number of 90° and 180° turns taken inside the box.
    pub turns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RayState {
    Traveling { at: Cell, heading: Direction },
    Exited(RayOutcome),
}

struct Ray<'a> {
    board: &'a Board,
    entry: Cell,
    path: Vec<Cell>,
    turns: usize,
    steps: usize,
}

impl<'a> Ray<'a> {
    fn new(board: &'a Board, entry: Cell) -> Self {
        let mut path = Vec::new();
        path.push(entry);
        Ray {
            board,
            entry,
            path,
            turns: 0,
            steps: 0,
        }
    }

    fn violation(&self) -> GameError {
        GameError::EngineInvariantViolation { steps: self.steps }
    }

    /// Advance the state machine by one step.
    fn step(&mut self, at: Cell, heading: Direction) -> Result<RayState, GameError> {
        self.steps += 1;
        if self.steps > MAX_TRACE_STEPS {
            return Err(self.violation());
        }

        // Travelling positions are always interior or the entry cell, so one
        // step inward never leaves the grid.
        let next = at.neighbor(heading).ok_or_else(|| self.violation())?;
        if self.board.atom_at(next) {
            return Ok(RayState::Exited(RayOutcome::hit(self.entry)));
        }

        let occupied = |side: Direction| {
            next.neighbor(side)
                .is_some_and(|diag| self.board.atom_at(diag))
        };
        let turn = match (occupied(heading.turn_left()), occupied(heading.turn_right())) {
            (true, true) => Some(heading.reverse()),
            (true, false) => Some(heading.turn_right()),
            (false, true) => Some(heading.turn_left()),
            (false, false) => None,
        };

        if let Some(new_heading) = turn {
            if at == self.entry {
                return Ok(RayState::Exited(RayOutcome::exited(self.entry, self.entry, true)));
            }
            self.turns += 1;
            log::trace!(
                "ray from {} turns {:?} -> {:?} at {}",
                self.entry,
                heading,
                new_heading,
                at
            );
            return Ok(RayState::Traveling {
                at,
                heading: new_heading,
            });
        }

        self.path.push(next);
        if next.is_border() {
            return Ok(RayState::Exited(RayOutcome::exited(
                self.entry,
                next,
                self.turns > 0,
            )));
        }
        Ok(RayState::Traveling { at: next, heading })
    }
}

/// Trace a ray fired from `entry`, returning the path alongside the outcome.
pub fn trace_path(board: &Board, entry: Cell) -> Result<RayTrace, GameError> {
    let heading = board.border_entry_direction(entry)?;
    let mut ray = Ray::new(board, entry);
    let mut state = RayState::Traveling { at: entry, heading };
    loop {
        match state {
            RayState::Traveling { at, heading } => {
                state = ray.step(at, heading).inspect_err(|e| {
                    error!("ray from {} aborted at {}: {}", entry, at, e);
                })?;
            }
            RayState::Exited(outcome) => {
                return Ok(RayTrace {
                    outcome,
                    path: ray.path,
                    turns: ray.turns,
                });
            }
        }
    }
}

/// Trace a ray fired from border cell `entry`. Pure: same board, same answer.
pub fn trace(board: &Board, entry: Cell) -> Result<RayOutcome, GameError> {
    trace_path(board, entry).map(|t| t.outcome)
}
