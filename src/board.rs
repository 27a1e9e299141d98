//! One side's view of the opponent grid: which cells are hits, misses or
//! still unexplored.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellSet;
use crate::common::{Cell, GameError};
use crate::config::BOARD_SIZE;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Orthogonal offsets, in the order up, down, left, right.
const NEIGHBORS4: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const NEIGHBORS8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// State of a single cell as seen by the shooting side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unknown,
    Miss,
    Hit,
}

impl CellState {
    /// Symbol used in rendering and in persisted snapshots.
    pub fn symbol(self) -> char {
        match self {
            CellState::Unknown => '.',
            CellState::Hit => 'X',
            CellState::Miss => 'O',
        }
    }
}

/// 10×10 grid of [`CellState`], stored as two disjoint bit layers.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    hits: CellSet,
    misses: CellSet,
}

impl Board {
    /// Create a board with every cell unknown.
    pub fn new() -> Self {
        Board {
            hits: CellSet::new(),
            misses: CellSet::new(),
        }
    }

    pub fn get(&self, cell: Cell) -> Result<CellState, GameError> {
        if self.hits.get(cell)? {
            Ok(CellState::Hit)
        } else if self.misses.get(cell)? {
            Ok(CellState::Miss)
        } else {
            Ok(CellState::Unknown)
        }
    }

    /// Record `state` at `cell`.
    ///
    /// Cells only move from `Unknown` to `Hit` or `Miss`. Writing the state a
    /// cell already has is a no-op; any other change of a resolved cell fails
    /// with [`GameError::CellAlreadyResolved`].
    pub fn set(&mut self, cell: Cell, state: CellState) -> Result<(), GameError> {
        let current = self.get(cell)?;
        if current == state {
            return Ok(());
        }
        if current != CellState::Unknown {
            return Err(GameError::CellAlreadyResolved);
        }
        match state {
            CellState::Hit => self.hits.insert(cell)?,
            CellState::Miss => self.misses.insert(cell)?,
            CellState::Unknown => unreachable!("current state is Unknown"),
        };
        Ok(())
    }

    /// `true` when `cell` is on the grid and not yet resolved.
    pub fn is_unknown(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Ok(CellState::Unknown))
    }

    /// In-bounds cells sharing an edge or a corner with `cell`.
    pub fn neighbors8(cell: Cell) -> impl Iterator<Item = Cell> {
        NEIGHBORS8
            .into_iter()
            .filter_map(move |(dr, dc)| cell.offset(dr, dc))
    }

    /// In-bounds cells sharing an edge with `cell`.
    pub fn neighbors4(cell: Cell) -> impl Iterator<Item = Cell> {
        NEIGHBORS4
            .into_iter()
            .filter_map(move |(dr, dc)| cell.offset(dr, dc))
    }

    /// Every unknown cell, in row-major order.
    pub fn unknown_cells(&self) -> Vec<Cell> {
        let resolved = self.hits | self.misses;
        cells()
            .filter(|&cell| !resolved.contains(cell))
            .collect()
    }

    pub fn hits(&self) -> CellSet {
        self.hits
    }

    pub fn misses(&self) -> CellSet {
        self.misses
    }

    /// Row-major string of cell symbols, one character per cell.
    pub fn flatten(&self) -> String {
        cells().map(|cell| self.state_at(cell).symbol()).collect()
    }

    // Only called with cells produced by `cells()`.
    fn state_at(&self, cell: Cell) -> CellState {
        if self.hits.contains(cell) {
            CellState::Hit
        } else if self.misses.contains(cell) {
            CellState::Miss
        } else {
            CellState::Unknown
        }
    }
}

/// All cells of the grid in row-major order.
pub fn cells() -> impl Iterator<Item = Cell> {
    (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Cell::new(row, col)))
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in 0..GRID_SIZE {
            write!(f, "  ")?;
            for col in 0..GRID_SIZE {
                write!(f, "{}", self.state_at(Cell::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
