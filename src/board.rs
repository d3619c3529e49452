//! Immutable atom layout and cell classification.

use alloc::vec::Vec;

use rand::seq::index;
use rand::Rng;

use crate::bitboard::CellSet;
use crate::cell::{interior_cells, Cell, Direction};
use crate::common::{ConfigIssue, GameError};
use crate::config::INTERIOR_CELLS;

/// The hidden box: a fixed set of atoms on interior cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    atoms: CellSet,
}

impl Board {
    /// Build a board from an atom list. Every atom must be a distinct interior cell.
    pub fn new(atoms: &[Cell]) -> Result<Self, GameError> {
        if atoms.len() > INTERIOR_CELLS {
            return Err(ConfigIssue::TooManyAtoms(atoms.len()).into());
        }
        let mut set = CellSet::new();
        for &atom in atoms {
            if !atom.is_interior() {
                return Err(ConfigIssue::AtomNotInterior(atom).into());
            }
            if !set.insert(atom)? {
                return Err(ConfigIssue::DuplicateAtom(atom).into());
            }
        }
        Ok(Board { atoms: set })
    }

    /// Build a board from an existing set, checking it only covers interior cells.
    pub fn from_set(atoms: CellSet) -> Result<Self, GameError> {
        if let Some(bad) = atoms.iter().find(|c| !c.is_interior()) {
            return Err(ConfigIssue::AtomNotInterior(bad).into());
        }
        Ok(Board { atoms })
    }

    /// Place `count` distinct atoms uniformly at random.
    pub fn random<R: Rng>(rng: &mut R, count: usize) -> Result<Self, GameError> {
        if count > INTERIOR_CELLS {
            return Err(ConfigIssue::TooManyAtoms(count).into());
        }
        let pool: Vec<Cell> = interior_cells().collect();
        let atoms: Vec<Cell> = index::sample(rng, INTERIOR_CELLS, count)
            .iter()
            .map(|i| pool[i])
            .collect();
        Board::new(&atoms)
    }

    /// True iff `cell` is interior and holds an atom. Border cells never do.
    pub fn has_atom(&self, cell: Cell) -> Result<bool, GameError> {
        if !cell.is_interior() && !cell.is_border() {
            return Err(GameError::out_of_bounds(cell));
        }
        Ok(self.atoms.contains(cell))
    }

    /// Unchecked lookup for the engine; anything off the interior is empty.
    #[inline]
    pub(crate) fn atom_at(&self, cell: Cell) -> bool {
        self.atoms.contains(cell)
    }

    pub fn is_interior(&self, cell: Cell) -> bool {
        cell.is_interior()
    }

    pub fn is_border(&self, cell: Cell) -> bool {
        cell.is_border()
    }

    /// Fixed inward travel direction for a ray fired from `cell`.
    pub fn border_entry_direction(&self, cell: Cell) -> Result<Direction, GameError> {
        cell.inward().ok_or(GameError::out_of_bounds(cell))
    }

    pub fn atoms(&self) -> CellSet {
        self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}
