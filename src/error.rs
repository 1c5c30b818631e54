use thiserror::Error;

/// Errors raised while configuring a tracker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("max_disappeared must be positive, got {0}")]
    InvalidMaxDisappeared(u32),
    #[error("trajectory length must be positive, got {0}")]
    InvalidTrajectoryLength(usize),
}
