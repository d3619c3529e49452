//! A fixed 10×10 set of cells packed into a single `u128`.
//!
//! The type is `no_std` friendly and never allocates. It backs the atom set,
//! the border usage set and both guess sets. Bit `row * 10 + col` is set when
//! the cell is a member.

use core::fmt;
use core::ops::Sub;

use crate::cell::Cell;
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;
const BOARD_BITS: usize = N * N;
const MASK: u128 = (1u128 << BOARD_BITS) - 1;

/// Errors returned by cell set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..10).
    IndexOutOfBounds { row: usize, col: usize },
    /// A raw value has bits set past the last cell.
    BitsOutsideGrid { raw: u128 },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            BitBoardError::BitsOutsideGrid { raw } => {
                write!(f, "BitsOutsideGrid: raw={:#x}", raw)
            }
        }
    }
}

/// Set of grid cells. Serialized as its raw `u128`; decoding rejects stray
/// high bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u128", into = "u128")
)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        CellSet { bits: 0 }
    }

    #[inline]
    fn index(cell: Cell) -> Result<usize, BitBoardError> {
        if cell.on_grid() {
            Ok(cell.row * N + cell.col)
        } else {
            Err(BitBoardError::IndexOutOfBounds {
                row: cell.row,
                col: cell.col,
            })
        }
    }

    /// Returns the number of members.
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Membership test; off-grid cells are never members.
    pub fn contains(&self, cell: Cell) -> bool {
        Self::index(cell).is_ok_and(|idx| (self.bits >> idx) & 1 == 1)
    }

    /// Adds `cell`, returning `true` if it was not already present.
    pub fn insert(&mut self, cell: Cell) -> Result<bool, BitBoardError> {
        let bit = 1u128 << Self::index(cell)?;
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        Ok(fresh)
    }

    pub const fn is_subset(&self, other: &CellSet) -> bool {
        self.bits & !other.bits == 0
    }

    pub const fn intersects(&self, other: &CellSet) -> bool {
        self.bits & other.bits != 0
    }

    /// Consumes the set and returns the raw integer.
    #[inline]
    pub const fn into_raw(self) -> u128 {
        self.bits
    }

    /// Creates a set from the raw integer, masking out bits past the grid.
    #[inline]
    pub const fn from_raw(raw: u128) -> Self {
        CellSet { bits: raw & MASK }
    }

    /// Builds a set from cells, failing on the first off-grid one.
    pub fn from_cells<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell)?;
        }
        Ok(set)
    }

    /// Members in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let mark = if self.contains(Cell::new(r, c)) { '■' } else { '□' };
                write!(f, "{} ", mark)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the members of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells {
    bits: u128,
    idx: usize,
}

impl Iterator for Cells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < BOARD_BITS {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & 1 == 1 {
                return Some(Cell::new(idx / N, idx % N));
            }
        }
        None
    }
}

impl IntoIterator for &CellSet {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

/// Set difference.
impl Sub for CellSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        CellSet::from_raw(self.bits & !rhs.bits)
    }
}

impl TryFrom<u128> for CellSet {
    type Error = BitBoardError;

    fn try_from(raw: u128) -> Result<Self, Self::Error> {
        if raw & !MASK != 0 {
            return Err(BitBoardError::BitsOutsideGrid { raw });
        }
        Ok(CellSet { bits: raw })
    }
}

impl From<CellSet> for u128 {
    fn from(set: CellSet) -> u128 {
        set.into_raw()
    }
}
