//! Run configuration.

use std::time::Duration;

use crate::pos::GridDims;

/// Top-level configuration for one garden run.
///
/// Typically assembled by the CLI after argument parsing (delays arrive as
/// f64 seconds and are converted to `Duration` there; the occupancy percent
/// and seed are resolved from flags or random draws).  Field ranges are
/// enforced by the run builder in `garden-sim`, not here.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Garden rows (n).  Must be ≥ 1.
    pub rows: u32,

    /// Garden columns (m).  Must be ≥ 1.
    pub cols: u32,

    /// Time gardener 1 spends working a plot it successfully claims.
    pub work_delay_first: Duration,

    /// Time gardener 2 spends working a plot it successfully claims.
    pub work_delay_second: Duration,

    /// Time either gardener spends passing a plot that is already blocked
    /// or processed.  Shared by both gardeners.
    pub blocked_delay: Duration,

    /// Fraction of plots pre-marked blocked, in percent (0..=100).
    pub occupancy_percent: u32,

    /// Master RNG seed.  The same seed always produces the same blocked
    /// layout for the same dimensions and percent.
    pub seed: u64,
}

impl RunConfig {
    /// The garden dimensions described by this configuration.
    #[inline]
    pub fn dims(&self) -> GridDims {
        GridDims { rows: self.rows, cols: self.cols }
    }
}
