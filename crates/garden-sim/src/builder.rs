//! Builder for constructing a [`GardenRun`].

use garden_core::{GardenRng, RunConfig};
use garden_grid::{Garden, GardenStore, seed_occupancy};

use crate::error::{SimError, SimResult};
use crate::gardener::Gardener;
use crate::runner::GardenRun;

/// Builder for [`GardenRun`].
///
/// # Required inputs
///
/// - [`RunConfig`] — dimensions, delays, occupancy percentage, seed.
///
/// # Optional inputs
///
/// | Method       | Default                                               |
/// |--------------|-------------------------------------------------------|
/// | `.garden(g)` | Fresh garden, seeded from `config.occupancy_percent`  |
///
/// # Example
///
/// ```rust,ignore
/// let run = GardenRunBuilder::new(config).build()?;
/// let outcome = run.run(&NoopObserver)?;
/// ```
pub struct GardenRunBuilder {
    config: RunConfig,
    garden: Option<Garden>,
}

impl GardenRunBuilder {
    pub fn new(config: RunConfig) -> Self {
        GardenRunBuilder {
            config,
            garden: None,
        }
    }

    /// Supply a pre-populated garden instead of random seeding.
    ///
    /// The layout is taken as-is: `config.occupancy_percent` and
    /// `config.seed` are ignored.  Dimensions must match the config.
    pub fn garden(mut self, garden: Garden) -> Self {
        self.garden = Some(garden);
        self
    }

    /// Validate the config, seed the garden, and assemble a run.
    pub fn build(self) -> SimResult<GardenRun> {
        if self.config.rows == 0 || self.config.cols == 0 {
            return Err(SimError::InvalidDims {
                rows: self.config.rows,
                cols: self.config.cols,
            });
        }
        let dims = self.config.dims();

        let garden = match self.garden {
            Some(garden) => {
                if garden.dims() != dims {
                    return Err(SimError::GardenDimsMismatch {
                        expected: dims,
                        got:      garden.dims(),
                    });
                }
                garden
            }
            None => {
                let mut garden = Garden::new(dims);
                let mut rng = GardenRng::new(self.config.seed);
                seed_occupancy(&mut garden, self.config.occupancy_percent, &mut rng)?;
                garden
            }
        };

        Ok(GardenRun {
            store:     GardenStore::new(garden),
            gardeners: Gardener::pair(&self.config),
        })
    }
}
