//! One gardener's identity, path, and pacing.

use std::time::Duration;

use garden_core::{GardenerId, RunConfig};
use garden_path::SerpentinePath;

/// A single worker in the run: a fixed role plus the delays it pays per step.
///
/// `work_delay` is consumed after successfully processing a plot;
/// `blocked_delay` after landing on a plot the other gardener or the seeding
/// already claimed.  Both are served while holding the garden lock.
#[derive(Debug, Clone)]
pub struct Gardener {
    pub id:            GardenerId,
    pub path:          SerpentinePath,
    pub work_delay:    Duration,
    pub blocked_delay: Duration,
}

impl Gardener {
    /// The run's two fixed roles.
    ///
    /// Gardener 1 walks the top-down serpentine with its own work delay;
    /// gardener 2 walks the bottom-up serpentine with its own.  The blocked
    /// delay is shared.
    pub fn pair(config: &RunConfig) -> [Gardener; 2] {
        [
            Gardener {
                id:            GardenerId::FIRST,
                path:          SerpentinePath::TopDown,
                work_delay:    config.work_delay_first,
                blocked_delay: config.blocked_delay,
            },
            Gardener {
                id:            GardenerId::SECOND,
                path:          SerpentinePath::BottomUp,
                work_delay:    config.work_delay_second,
                blocked_delay: config.blocked_delay,
            },
        ]
    }
}
