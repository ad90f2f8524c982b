//! Per-run tallies assembled when the gardeners join.

use garden_core::GardenerId;
use garden_grid::CellCounts;

/// One gardener's step tally over its whole walk.
///
/// `visited` counts every plot the path touched; it always splits exactly
/// into `processed + skipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GardenerReport {
    pub id:        GardenerId,
    pub visited:   usize,
    pub processed: usize,
    pub skipped:   usize,
}

impl GardenerReport {
    pub(crate) fn new(id: GardenerId) -> Self {
        GardenerReport {
            id,
            visited: 0,
            processed: 0,
            skipped: 0,
        }
    }
}

/// Whole-run summary: both gardeners' tallies plus the final plot counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub gardeners: [GardenerReport; 2],
    pub counts:    CellCounts,
}

impl RunReport {
    pub(crate) fn new(gardeners: [GardenerReport; 2], counts: CellCounts) -> Self {
        RunReport { gardeners, counts }
    }

    /// Plots processed across both gardeners.  For a run that began with a
    /// fresh garden this equals `counts.processed`.
    pub fn total_processed(&self) -> usize {
        self.gardeners.iter().map(|g| g.processed).sum()
    }

    /// Plots visited across both gardeners: each walks the full grid, so
    /// this is twice the plot count.
    pub fn total_visited(&self) -> usize {
        self.gardeners.iter().map(|g| g.visited).sum()
    }
}
