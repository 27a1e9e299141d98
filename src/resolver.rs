//! Applying a shot to the shooter's view of the opponent.

use log::info;

use crate::board::{Board, CellState};
use crate::common::{Cell, GameError, Outcome};
use crate::registry::{HitSet, ShipRegistry};

/// Fire at `cell`.
///
/// The outcome comes from the registry, not from the board, so repeating a
/// shot reports the same outcome while leaving the board unchanged. When the
/// hit completes a ship, every unknown cell around it is marked as a miss:
/// ships never touch, so that water cannot hide anything. Cells the registry
/// places a ship on are left alone, so a layout with touching ships still
/// resolves every hit.
pub fn apply_shot(
    board: &mut Board,
    cell: Cell,
    registry: &ShipRegistry,
    hits: &mut HitSet,
) -> Result<Outcome, GameError> {
    if !cell.in_bounds() {
        return Err(GameError::OutOfBounds {
            row: cell.row,
            col: cell.col,
        });
    }
    let Some(id) = registry.ship_at(cell) else {
        if board.is_unknown(cell) {
            board.set(cell, CellState::Miss)?;
        }
        return Ok(Outcome::Miss);
    };

    board.set(cell, CellState::Hit)?;
    let fresh = hits.insert(cell)?;
    if fresh && registry.is_destroyed(id, hits) {
        if let Some(ship) = registry.ship(id) {
            info!("ship {} destroyed at {}", id, cell);
            mark_surroundings(board, registry, ship.cells())?;
        }
    }
    Ok(Outcome::Hit)
}

/// Mark every unknown 8-neighbor of `cells` as a miss, skipping cells
/// occupied by a ship in `registry`.
pub fn mark_surroundings(
    board: &mut Board,
    registry: &ShipRegistry,
    cells: &[Cell],
) -> Result<(), GameError> {
    for &cell in cells {
        for neighbor in Board::neighbors8(cell) {
            if board.is_unknown(neighbor) && registry.ship_at(neighbor).is_none() {
                board.set(neighbor, CellState::Miss)?;
            }
        }
    }
    Ok(())
}
