use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransientError {
    #[error("input format error: {0}")]
    InputFormat(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("degenerate trajectory: {len} points (reference line needs at least 6)")]
    DegenerateTrajectory { len: usize },
}
