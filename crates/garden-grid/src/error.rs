use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("occupancy percentage {percent} exceeds 100")]
    OccupancyOutOfRange { percent: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
