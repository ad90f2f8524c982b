//! Grid geometry: plot coordinates and garden dimensions.
//!
//! Rows and columns are `u32` — plenty for any printable garden, and the
//! unsigned type makes "walked off the top/left edge" an explicit
//! `checked_sub` instead of a sign test.

use std::fmt;

// ── CellPos ───────────────────────────────────────────────────────────────────

/// A (row, column) plot coordinate.  `(0, 0)` is the top-left corner.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    pub row: u32,
    pub col: u32,
}

impl CellPos {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── GridDims ──────────────────────────────────────────────────────────────────

/// Fixed garden dimensions, `rows × cols`.  Immutable for the whole run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    pub rows: u32,
    pub cols: u32,
}

impl GridDims {
    /// Construct garden dimensions.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if either dimension is zero; a zero-sized garden
    /// is rejected earlier by run validation.
    pub fn new(rows: u32, cols: u32) -> Self {
        debug_assert!(rows > 0 && cols > 0, "garden dimensions must be >= 1");
        Self { rows, cols }
    }

    /// Total number of plots.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// `true` if `pos` lies inside the garden.
    #[inline]
    pub fn contains(self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of `pos` into a flat cell array.
    ///
    /// Callers must ensure `pos` is in bounds (checked in debug mode).
    #[inline]
    pub fn index_of(self, pos: CellPos) -> usize {
        debug_assert!(self.contains(pos), "{pos} out of bounds");
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    /// The last plot in row-major order: `(rows − 1, cols − 1)`.
    #[inline]
    pub fn bottom_right(self) -> CellPos {
        CellPos::new(self.rows - 1, self.cols - 1)
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
