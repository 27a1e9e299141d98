//! Common types for the game: coordinates, shot outcomes and errors.

use alloc::string::String;
use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

/// A board coordinate. Rows and columns are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` when the coordinate lies on the 10×10 grid.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE as usize && self.col < BOARD_SIZE as usize
    }

    /// Checked construction, rejecting coordinates off the grid.
    pub fn checked(row: usize, col: usize) -> Result<Self, GameError> {
        let cell = Self::new(row, col);
        if cell.in_bounds() {
            Ok(cell)
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// The cell displaced by (`dr`, `dc`), if it is still on the grid.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let cell = Self::new(row, col);
        cell.in_bounds().then_some(cell)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Result of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Hit,
    Miss,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit => write!(f, "hit"),
            Outcome::Miss => write!(f, "miss"),
        }
    }
}

/// Malformed coordinate text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was entered.
    Empty,
    /// A coordinate needs exactly `expected` comma separated numbers.
    WrongTokenCount { expected: usize, found: usize },
    /// A token is not a non-negative integer.
    NotAnInteger(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty input"),
            ParseError::WrongTokenCount { expected, found } => write!(
                f,
                "Expected {} comma separated numbers, found {}",
                expected, found
            ),
            ParseError::NotAnInteger(token) => write!(f, "'{}' is not a number", token),
        }
    }
}

/// Reasons a ship placement is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Number of cells differs from the ship size being placed.
    WrongLength { expected: usize, found: usize },
    /// The same cell was listed twice.
    DuplicateCell,
    /// Cells span more than one row and more than one column.
    NotStraight,
    /// Cells leave a gap along the line.
    NotContiguous,
    /// A cell is orthogonally or diagonally adjacent to a placed ship.
    TouchesAnotherShip,
    /// All ships of the fleet are already placed.
    FleetComplete,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongLength { expected, found } => write!(
                f,
                "Wrong number of coordinates: expected {}, found {}",
                expected, found
            ),
            PlacementError::DuplicateCell => write!(f, "Ship lists the same cell twice"),
            PlacementError::NotStraight => write!(f, "Ship must lie in a single row or column"),
            PlacementError::NotContiguous => write!(f, "Ship cells must be consecutive"),
            PlacementError::TouchesAnotherShip => write!(f, "Ship touches another ship"),
            PlacementError::FleetComplete => write!(f, "All ships are already placed"),
        }
    }
}

/// Errors returned by the game core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Parse(ParseError),
    /// Coordinate outside the 10×10 grid.
    OutOfBounds { row: usize, col: usize },
    InvalidPlacement(PlacementError),
    /// Attempted to change a cell that is already a hit or a miss.
    CellAlreadyResolved,
    /// Two ships of one registry claim the same cell.
    CellOccupied,
    /// Every cell of the board is already resolved.
    NoTargetsLeft,
    /// Random placement gave up.
    UnableToPlaceFleet,
    /// The input stream ended while waiting for a move.
    InputClosed,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GameError::OutOfBounds { row, col },
        }
    }
}

impl From<ParseError> for GameError {
    fn from(err: ParseError) -> Self {
        GameError::Parse(err)
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Parse(e) => write!(f, "Invalid input: {}", e),
            GameError::OutOfBounds { row, col } => write!(
                f,
                "Coordinate {},{} is outside the board (0-{})",
                row,
                col,
                BOARD_SIZE - 1
            ),
            GameError::InvalidPlacement(e) => write!(f, "Invalid placement: {}", e),
            GameError::CellAlreadyResolved => write!(f, "Cell is already resolved"),
            GameError::CellOccupied => write!(f, "Cell is claimed by more than one ship"),
            GameError::NoTargetsLeft => write!(f, "No unexplored cells left"),
            GameError::UnableToPlaceFleet => write!(f, "Unable to place fleet"),
            GameError::InputClosed => write!(f, "Input closed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
