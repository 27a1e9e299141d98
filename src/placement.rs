//! Ship placement rules and random fleet generation.
//!
//! A ship is a straight, gap-free run of 1 to 4 cells. Ships may not touch,
//! not even diagonally.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::bitboard::CellSet;
use crate::board::Board;
use crate::common::{Cell, GameError, PlacementError};
use crate::config::{BOARD_SIZE, SHIP_SIZES};
use crate::registry::ShipRegistry;
use crate::ship::{Orientation, ShipId};

/// Ship cells grouped per ship, in ship id order.
pub type Layout = Vec<Vec<Cell>>;

const MAX_SHIP_LEN: usize = 4;
const MAX_ATTEMPTS_PER_SHIP: usize = 1000;
const MAX_FLEET_RESTARTS: usize = 100;

/// Check one ship of `size` cells against the already `occupied` cells.
///
/// Checks run in order: cell count, bounds, duplicates, straightness,
/// contiguity, then contact with other ships.
pub fn validate_ship(cells: &[Cell], size: usize, occupied: &CellSet) -> Result<(), GameError> {
    if cells.len() != size {
        return Err(PlacementError::WrongLength {
            expected: size,
            found: cells.len(),
        }
        .into());
    }
    if let Some(cell) = cells.iter().find(|c| !c.in_bounds()) {
        return Err(GameError::OutOfBounds {
            row: cell.row,
            col: cell.col,
        });
    }
    let mut sorted = cells.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != cells.len() {
        return Err(PlacementError::DuplicateCell.into());
    }
    let same_row = sorted.iter().all(|c| c.row == sorted[0].row);
    let same_col = sorted.iter().all(|c| c.col == sorted[0].col);
    if !same_row && !same_col {
        return Err(PlacementError::NotStraight.into());
    }
    // Sorted cells of a straight ship must advance by exactly one step.
    let contiguous = sorted.windows(2).all(|pair| {
        if same_row {
            pair[1].col == pair[0].col + 1
        } else {
            pair[1].row == pair[0].row + 1
        }
    });
    if !contiguous {
        return Err(PlacementError::NotContiguous.into());
    }
    if touches(cells, occupied) {
        return Err(PlacementError::TouchesAnotherShip.into());
    }
    Ok(())
}

/// `true` if any of `cells`, or any of their 8 neighbors, is occupied.
pub fn touches(cells: &[Cell], occupied: &CellSet) -> bool {
    cells.iter().any(|&cell| {
        occupied.contains(cell) || Board::neighbors8(cell).any(|n| occupied.contains(n))
    })
}

/// Validate a whole layout read back from storage. Ship sizes are not
/// required to follow [`SHIP_SIZES`], only to lie in `1..=4`.
pub fn validate_layout(layout: &[Vec<Cell>]) -> Result<(), GameError> {
    let mut occupied = CellSet::new();
    for cells in layout {
        if cells.is_empty() || cells.len() > MAX_SHIP_LEN {
            return Err(PlacementError::WrongLength {
                expected: cells.len().clamp(1, MAX_SHIP_LEN),
                found: cells.len(),
            }
            .into());
        }
        validate_ship(cells, cells.len(), &occupied)?;
        for &cell in cells {
            occupied.insert(cell)?;
        }
    }
    Ok(())
}

/// Incrementally builds a fleet in the order given by [`SHIP_SIZES`].
#[derive(Debug, Clone, Default)]
pub struct FleetBuilder {
    ships: Layout,
    occupied: CellSet,
}

impl FleetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the next ship to place, or `None` once the fleet is complete.
    pub fn next_size(&self) -> Option<usize> {
        SHIP_SIZES.get(self.ships.len()).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.next_size().is_none()
    }

    /// Every cell placed so far.
    pub fn occupied(&self) -> CellSet {
        self.occupied
    }

    pub fn ships(&self) -> &[Vec<Cell>] {
        &self.ships
    }

    /// Validate and place the next ship.
    pub fn add(&mut self, cells: Vec<Cell>) -> Result<ShipId, GameError> {
        let size = self.next_size().ok_or(PlacementError::FleetComplete)?;
        validate_ship(&cells, size, &self.occupied)?;
        for &cell in &cells {
            self.occupied.insert(cell)?;
        }
        self.ships.push(cells);
        Ok(self.ships.len() - 1)
    }

    /// Place the next ship at a random legal position.
    pub fn add_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ShipId, GameError> {
        let size = self.next_size().ok_or(PlacementError::FleetComplete)?;
        let cells = random_ship(rng, size, &self.occupied).ok_or(GameError::UnableToPlaceFleet)?;
        self.add(cells)
    }

    pub fn into_layout(self) -> Layout {
        self.ships
    }

    pub fn build(self) -> Result<ShipRegistry, GameError> {
        ShipRegistry::from_layout(self.ships)
    }
}

/// Random straight ship of `size` cells that does not touch `occupied`.
///
/// Returns `None` if no spot was found within a bounded number of attempts.
pub fn random_ship<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    occupied: &CellSet,
) -> Option<Vec<Cell>> {
    let grid = BOARD_SIZE as usize;
    if size == 0 || size > grid {
        return None;
    }
    for _ in 0..MAX_ATTEMPTS_PER_SHIP {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let cells: Vec<Cell> = match orientation {
            Orientation::Horizontal => {
                let row = rng.random_range(0..grid);
                let col = rng.random_range(0..=grid - size);
                (0..size).map(|i| Cell::new(row, col + i)).collect()
            }
            Orientation::Vertical => {
                let row = rng.random_range(0..=grid - size);
                let col = rng.random_range(0..grid);
                (0..size).map(|i| Cell::new(row + i, col)).collect()
            }
        };
        if !touches(&cells, occupied) {
            return Some(cells);
        }
    }
    None
}

/// A complete random fleet following [`SHIP_SIZES`].
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Layout, GameError> {
    for attempt in 0..MAX_FLEET_RESTARTS {
        let mut builder = FleetBuilder::new();
        while !builder.is_complete() {
            if builder.add_random(rng).is_err() {
                break;
            }
        }
        if builder.is_complete() {
            debug!("random fleet placed after {} restart(s)", attempt);
            return Ok(builder.into_layout());
        }
    }
    warn!("giving up on random fleet after {} restarts", MAX_FLEET_RESTARTS);
    Err(GameError::UnableToPlaceFleet)
}
