//! Placed ships and their footprints.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellSet;
use crate::common::{Cell, GameError};

/// Sequential ship identifier within one fleet, starting at 0.
pub type ShipId = usize;

/// Orientation of a ship, or of the line of hits the bot is following.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Orientation of the line through two distinct cells. Cells sharing a
    /// row are horizontal; anything else is treated as vertical.
    pub fn between(a: Cell, b: Cell) -> Self {
        if a.row == b.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A ship placed on the grid. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    cells: Vec<Cell>,
    footprint: CellSet,
}

impl Ship {
    pub fn new(id: ShipId, cells: Vec<Cell>) -> Result<Self, GameError> {
        let footprint = CellSet::from_cells(cells.iter().copied())?;
        if footprint.len() != cells.len() {
            return Err(GameError::CellOccupied);
        }
        Ok(Ship {
            id,
            cells,
            footprint,
        })
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Cells in the order they were supplied.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.footprint.contains(cell)
    }

    /// Every cell of the ship is in `hits`.
    pub fn is_sunk(&self, hits: &CellSet) -> bool {
        self.footprint.is_subset(hits)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ id: {}, cells: [", self.id)?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "] }}")
    }
}
