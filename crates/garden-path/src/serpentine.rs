//! Serpentine successor rules for the two gardener roles.

use std::fmt;

use garden_core::{CellPos, GridDims};

/// Traversal role assigned to a gardener for the whole run.
///
/// A path answers two questions: where does this gardener start, and given
/// where it stands, which plot does it try next.  `None` from [`next`]
/// means the gardener has walked off the grid and its run is over.
///
/// [`next`]: SerpentinePath::next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerpentinePath {
    /// Horizontal serpentine from the top-left corner: even rows run left
    /// to right, odd rows right to left, dropping one row at each edge.
    TopDown,
    /// Vertical serpentine from the bottom-right corner, one column at a
    /// time moving left.  Direction within a column flips with the number
    /// of columns already completed: the first column (and every second
    /// one after it) is climbed bottom to top, the ones between are
    /// descended top to bottom.
    BottomUp,
}

impl SerpentinePath {
    /// First plot this role visits.
    #[inline]
    pub fn start(self, dims: GridDims) -> CellPos {
        match self {
            SerpentinePath::TopDown => CellPos::new(0, 0),
            SerpentinePath::BottomUp => dims.bottom_right(),
        }
    }

    /// Successor of `pos`, or `None` once the walk leaves the grid.
    ///
    /// `pos` must lie within `dims`; the rules only ever step to an
    /// adjacent plot or off the boundary.
    pub fn next(self, pos: CellPos, dims: GridDims) -> Option<CellPos> {
        debug_assert!(dims.contains(pos), "successor of out-of-grid {pos}");
        match self {
            SerpentinePath::TopDown => {
                if pos.row % 2 == 0 && pos.col + 1 < dims.cols {
                    Some(CellPos::new(pos.row, pos.col + 1))
                } else if pos.row % 2 == 1 && pos.col > 0 {
                    Some(CellPos::new(pos.row, pos.col - 1))
                } else if pos.row + 1 < dims.rows {
                    Some(CellPos::new(pos.row + 1, pos.col))
                } else {
                    None
                }
            }
            SerpentinePath::BottomUp => {
                // Parity of columns finished so far, counted from the right.
                let band = (dims.cols - 1 - pos.col) % 2;
                if band == 0 && pos.row > 0 {
                    Some(CellPos::new(pos.row - 1, pos.col))
                } else if band == 1 && pos.row + 1 < dims.rows {
                    Some(CellPos::new(pos.row + 1, pos.col))
                } else {
                    pos.col.checked_sub(1).map(|col| CellPos::new(pos.row, col))
                }
            }
        }
    }

    /// Iterator over every plot in visiting order, starting at [`start`].
    ///
    /// [`start`]: SerpentinePath::start
    pub fn walk(self, dims: GridDims) -> Walk {
        Walk {
            path: self,
            dims,
            upcoming: Some(self.start(dims)),
        }
    }
}

impl fmt::Display for SerpentinePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerpentinePath::TopDown => write!(f, "top-down"),
            SerpentinePath::BottomUp => write!(f, "bottom-up"),
        }
    }
}

/// Lazy walk over a grid in one role's visiting order.
///
/// Yields each of the `rows * cols` plots exactly once.
#[derive(Debug, Clone)]
pub struct Walk {
    path: SerpentinePath,
    dims: GridDims,
    upcoming: Option<CellPos>,
}

impl Iterator for Walk {
    type Item = CellPos;

    fn next(&mut self) -> Option<CellPos> {
        let current = self.upcoming?;
        self.upcoming = self.path.next(current, self.dims);
        Some(current)
    }
}
