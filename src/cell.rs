//! Grid coordinates and travel directions.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A `(row, col)` position on the 10×10 grid.
///
/// The coordinate itself is not validated; classification into interior,
/// border and off-grid positions is done by [`Cell::is_interior`] and
/// [`Cell::is_border`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

const LAST: usize = BOARD_SIZE as usize - 1;

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if the cell lies on the grid at all (corners included).
    pub const fn on_grid(self) -> bool {
        self.row <= LAST && self.col <= LAST
    }

    /// True for cells that may hold atoms and carry rays.
    pub const fn is_interior(self) -> bool {
        self.row >= 1 && self.row < LAST && self.col >= 1 && self.col < LAST
    }

    /// True for the 32 entry/exit cells of the ring. Corners are excluded.
    pub const fn is_border(self) -> bool {
        if !self.on_grid() || self.is_interior() {
            return false;
        }
        let row_edge = self.row == 0 || self.row == LAST;
        let col_edge = self.col == 0 || self.col == LAST;
        row_edge != col_edge
    }

    /// The fixed inward direction of a border cell, `None` otherwise.
    pub const fn inward(self) -> Option<Direction> {
        if !self.is_border() {
            return None;
        }
        Some(if self.row == 0 {
            Direction::Down
        } else if self.row == LAST {
            Direction::Up
        } else if self.col == 0 {
            Direction::Right
        } else {
            Direction::Left
        })
    }

    /// The neighbouring cell one step in `dir`, if it is still on the grid.
    pub fn neighbor(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Cell::new(row, col);
        next.on_grid().then_some(next)
    }

    /// The border cell on the far side of the grid along this cell's axis.
    pub const fn opposite(self) -> Cell {
        match self.inward() {
            Some(Direction::Down) | Some(Direction::Up) => Cell::new(LAST - self.row, self.col),
            Some(Direction::Left) | Some(Direction::Right) => Cell::new(self.row, LAST - self.col),
            None => self,
        }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axis-aligned travel direction of a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, col)` offset of a single step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Quarter turn counter-clockwise, as seen by the traveller.
    pub const fn turn_left(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Quarter turn clockwise, as seen by the traveller.
    pub const fn turn_right(self) -> Self {
        self.turn_left().reverse()
    }
}

/// Every border cell, clockwise from `(0, 1)`.
pub fn border_cells() -> impl Iterator<Item = Cell> {
    let top = (1..LAST).map(|c| Cell::new(0, c));
    let right = (1..LAST).map(|r| Cell::new(r, LAST));
    let bottom = (1..LAST).rev().map(|c| Cell::new(LAST, c));
    let left = (1..LAST).rev().map(|r| Cell::new(r, 0));
    top.chain(right).chain(bottom).chain(left)
}

/// Every interior cell in row-major order.
pub fn interior_cells() -> impl Iterator<Item = Cell> {
    (1..LAST).flat_map(|r| (1..LAST).map(move |c| Cell::new(r, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_disjoint() {
        for r in 0..BOARD_SIZE as usize {
            for c in 0..BOARD_SIZE as usize {
                let cell = Cell::new(r, c);
                assert!(!(cell.is_interior() && cell.is_border()), "{}", cell);
            }
        }
        assert!(!Cell::new(0, 0).is_border());
        assert!(!Cell::new(9, 9).is_border());
        assert!(!Cell::new(10, 3).is_border());
    }

    #[test]
    fn ring_and_interior_sizes() {
        assert_eq!(border_cells().count(), 32);
        assert_eq!(interior_cells().count(), 64);
        assert!(border_cells().all(|c| c.is_border()));
    }

    #[test]
    fn turns_compose() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(d.turn_left().turn_right(), d);
            assert_eq!(d.turn_left().turn_left(), d.reverse());
        }
        assert_eq!(Direction::Right.turn_left(), Direction::Up);
        assert_eq!(Direction::Right.turn_right(), Direction::Down);
    }

    #[test]
    fn opposite_mirrors_axis() {
        assert_eq!(Cell::new(0, 3).opposite(), Cell::new(9, 3));
        assert_eq!(Cell::new(4, 9).opposite(), Cell::new(4, 0));
    }
}
