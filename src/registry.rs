//! The fleet of one side: which ship occupies which cell.

use alloc::vec::Vec;

use crate::bitboard::CellSet;
use crate::common::{Cell, GameError};
use crate::config::BOARD_SIZE;
use crate::placement::Layout;
use crate::ship::{Ship, ShipId};

/// Cells successfully hit by one side. Only ever grows.
pub type HitSet = CellSet;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Immutable set of ships with O(1) cell lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipRegistry {
    ships: Vec<Ship>,
    owners: [[Option<ShipId>; GRID_SIZE]; GRID_SIZE],
    occupied: CellSet,
}

impl ShipRegistry {
    /// Build a registry from ship cell groups; group `i` becomes ship `i`.
    ///
    /// The layout is expected to be validated already. This only enforces
    /// that every cell is on the grid and claimed by at most one ship.
    pub fn from_layout(layout: Layout) -> Result<Self, GameError> {
        let mut owners = [[None; GRID_SIZE]; GRID_SIZE];
        let mut occupied = CellSet::new();
        let mut ships = Vec::with_capacity(layout.len());
        for (id, cells) in layout.into_iter().enumerate() {
            let ship = Ship::new(id, cells)?;
            for &cell in ship.cells() {
                if !occupied.insert(cell)? {
                    return Err(GameError::CellOccupied);
                }
                owners[cell.row][cell.col] = Some(id);
            }
            ships.push(ship);
        }
        Ok(ShipRegistry {
            ships,
            owners,
            occupied,
        })
    }

    /// Id of the ship covering `cell`, if any. Off-grid cells have none.
    pub fn ship_at(&self, cell: Cell) -> Option<ShipId> {
        if !cell.in_bounds() {
            return None;
        }
        self.owners[cell.row][cell.col]
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// `true` iff every cell of ship `id` is in `hits`. Unknown ids are never
    /// destroyed.
    pub fn is_destroyed(&self, id: ShipId, hits: &HitSet) -> bool {
        self.ships.get(id).is_some_and(|ship| ship.is_sunk(hits))
    }

    /// Union of every ship's cells.
    pub fn all_cells(&self) -> CellSet {
        self.occupied
    }

    /// Every ship is destroyed by `hits`.
    pub fn all_destroyed(&self, hits: &HitSet) -> bool {
        self.occupied.is_subset(hits)
    }

    /// Number of ships not yet destroyed by `hits`.
    pub fn remaining(&self, hits: &HitSet) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk(hits)).count()
    }

    /// Cells grouped per ship, as accepted by [`from_layout`](Self::from_layout).
    pub fn layout(&self) -> Layout {
        self.ships.iter().map(|s| s.cells().to_vec()).collect()
    }
}
