//! A fixed-size set of grid cells packed into one unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` grid is
//! stored row-major in the bits of `T`, so `N * N` must not exceed `T::BITS`.
//! It backs the hit/miss layers of a [`Board`](crate::Board), ship footprints
//! and the hit sets scored by each side.

use core::ops::BitOr;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Cell;
use crate::config::BOARD_SIZE;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// Cell set sized for the game grid.
pub type CellSet = BitBoard<u128, { BOARD_SIZE as usize }>;

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    /// Create a new empty bitboard.
    #[inline]
    pub fn new() -> Self {
        debug_assert!(Self::BOARD_BITS <= mem::size_of::<T>() * 8);
        BitBoard { bits: T::zero() }
    }

    /// Build a board from a list of cells.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut board = Self::new();
        for cell in cells {
            board.insert(cell)?;
        }
        Ok(board)
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at `cell`.
    pub fn get(&self, cell: Cell) -> Result<bool, BitBoardError> {
        let idx = Self::index(cell)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Like [`get`](Self::get) but treats off-grid cells as absent.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.get(cell).unwrap_or(false)
    }

    /// Sets the bit at `cell`. Returns `true` if it was not already set.
    pub fn insert(&mut self, cell: Cell) -> Result<bool, BitBoardError> {
        let idx = Self::index(cell)?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Returns `true` if every cell of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        (self.bits & !other.bits).is_zero()
    }

    /// Iterator over the set cells in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells { board: self, idx: 0 }
    }

    #[inline]
    fn index(cell: Cell) -> Result<usize, BitBoardError> {
        if cell.row >= N || cell.col >= N {
            Err(BitBoardError::IndexOutOfBounds {
                row: cell.row,
                col: cell.col,
            })
        } else {
            Ok(cell.row * N + cell.col)
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Cell;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < BitBoard::<T, N>::BOARD_BITS {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Cell::new(idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}
