use thiserror::Error;

/// Errors raised when building distributions or summarising samples.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// Bounds are not finite, not ordered, or too far apart to scale by.
    #[error("invalid range [{low}, {high}): bounds must be finite with low < high")]
    InvalidRange { low: f64, high: f64 },

    #[error("histogram needs at least one bin")]
    NoBins,

    #[error("cannot summarise an empty sample")]
    EmptySample,
}
