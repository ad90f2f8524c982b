//! Pre-run seeding of blocked plots.
//!
//! Seeding runs once, single-threaded, before either gardener thread is
//! spawned — it takes the bare [`Garden`] by `&mut` precisely because no
//! concurrent reader can exist yet.

use std::ops::RangeInclusive;

use garden_core::{CellPos, GardenRng};

use crate::error::{GridError, GridResult};
use crate::garden::Garden;

/// Percentage range drawn from when the caller did not pick one.
pub const DEFAULT_PERCENT_RANGE: RangeInclusive<u32> = 10..=30;

/// Draw an occupancy percentage uniformly from [`DEFAULT_PERCENT_RANGE`].
pub fn draw_occupancy_percent(rng: &mut GardenRng) -> u32 {
    rng.gen_range(DEFAULT_PERCENT_RANGE)
}

/// Mark `floor(rows * cols * percent / 100)` distinct plots blocked,
/// drawn uniformly without replacement, and return how many were placed.
///
/// A draw that lands on an already-blocked plot does not count; it is
/// simply redrawn.  The final draws may retry many times at high
/// percentages, but a free plot remains until the target is met, so the
/// loop cannot stall.
pub fn seed_occupancy(
    garden: &mut Garden,
    percent: u32,
    rng: &mut GardenRng,
) -> GridResult<usize> {
    if percent > 100 {
        return Err(GridError::OccupancyOutOfRange { percent });
    }
    let dims = garden.dims();
    let target = dims.cell_count() * percent as usize / 100;
    let mut placed = 0;
    while placed < target {
        let pos = CellPos::new(rng.gen_range(0..dims.rows), rng.gen_range(0..dims.cols));
        if garden.place_blocked(pos) {
            placed += 1;
        }
    }
    Ok(target)
}
