use forage_core::Sector;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WanderError {
    #[error("base speed must be finite and >= 0, got {0}")]
    InvalidSpeed(f32),

    #[error("invalid wander sector {0:?}")]
    InvalidSector(Sector),
}

pub type WanderResult<T> = Result<T, WanderError>;
