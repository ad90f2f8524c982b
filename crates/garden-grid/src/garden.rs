//! Dense plot storage and the one race-prone operation on it.

use garden_core::{Cell, CellPos, GridDims};

/// Row-major grid of plot states.
///
/// A `Garden` is plain data with no interior locking.  Concurrent access
/// goes through [`GardenStore`](crate::GardenStore), which wraps one behind
/// the run's single mutex; everything here assumes the caller already has
/// exclusive access.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Garden {
    dims:  GridDims,
    cells: Vec<Cell>,
}

impl Garden {
    /// Fresh garden with every plot [`Cell::Empty`].
    pub fn new(dims: GridDims) -> Self {
        Garden {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()],
        }
    }

    /// Garden with the given plots already blocked, for callers that bring
    /// their own layout instead of random seeding.  Every position must lie
    /// within `dims`; duplicates are harmless.
    pub fn with_blocked(dims: GridDims, blocked: &[CellPos]) -> Self {
        let mut garden = Garden::new(dims);
        for &pos in blocked {
            garden.place_blocked(pos);
        }
        garden
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// State of the plot at `pos`, or `None` if `pos` is off the grid.
    pub fn get(&self, pos: CellPos) -> Option<Cell> {
        self.dims
            .contains(pos)
            .then(|| self.cells[self.dims.index_of(pos)])
    }

    /// State of the plot at `pos`.  `pos` must lie within the grid.
    #[inline]
    pub fn cell(&self, pos: CellPos) -> Cell {
        self.cells[self.dims.index_of(pos)]
    }

    /// One gardener step's read-modify-write, as a single operation.
    ///
    /// Returns the plot's *previous* state: [`Cell::Empty`] means the plot
    /// was free and has now been marked [`Cell::Processed`]; anything else
    /// means the plot was left untouched.  Both gardeners call this through
    /// the store's lock, which is what makes the check and the write land
    /// as one step.
    pub fn try_process(&mut self, pos: CellPos) -> Cell {
        let idx = self.dims.index_of(pos);
        let previous = self.cells[idx];
        if previous == Cell::Empty {
            self.cells[idx] = Cell::Processed;
        }
        previous
    }

    /// Mark the empty plot at `pos` blocked.
    ///
    /// Returns `false` without touching the plot if it is not empty, which
    /// is how seeding detects a collision and redraws.
    pub(crate) fn place_blocked(&mut self, pos: CellPos) -> bool {
        let idx = self.dims.index_of(pos);
        if self.cells[idx] != Cell::Empty {
            return false;
        }
        self.cells[idx] = Cell::Blocked;
        true
    }

    /// Rows as contiguous slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.dims.cols as usize)
    }

    /// Tally every plot state across the garden.
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &cell in &self.cells {
            match cell {
                Cell::Empty => counts.empty += 1,
                Cell::Blocked => counts.blocked += 1,
                Cell::Processed => counts.processed += 1,
            }
        }
        counts
    }
}

/// Per-state plot tally, as returned by [`Garden::counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCounts {
    pub empty:     usize,
    pub blocked:   usize,
    pub processed: usize,
}

impl CellCounts {
    pub fn total(&self) -> usize {
        self.empty + self.blocked + self.processed
    }
}
