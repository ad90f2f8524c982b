use garden_core::{GardenerId, GridDims};
use garden_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    InvalidDims { rows: u32, cols: u32 },

    #[error("supplied garden is {got}, run expects {expected}")]
    GardenDimsMismatch { expected: GridDims, got: GridDims },

    #[error("occupancy seeding failed: {0}")]
    Seeding(#[from] GridError),

    #[error("{0} panicked mid-run")]
    GardenerPanicked(GardenerId),
}

pub type SimResult<T> = Result<T, SimError>;
