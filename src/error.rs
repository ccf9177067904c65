//! Library error type.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors surfaced at the simulation and transform entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// A pitch event failed validation at the single-event boundary.
    #[error("malformed pitch event: {0}")]
    MalformedEvent(&'static str),

    /// A pitch event inside a batch failed validation. The whole batch
    /// is rejected; dropping the event would break index alignment.
    #[error("malformed pitch event at index {index}: {reason}")]
    InvalidEvent {
        index: usize,
        reason: &'static str,
    },

    /// Integration step size was zero, negative, or non-finite.
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    /// Transform configuration cannot produce a usable mapping.
    #[error("degenerate transform configuration: {0}")]
    InvalidTransform(&'static str),

    /// Stadium reference data could not be read or was missing columns.
    #[error("stadium data error: {0}")]
    StadiumData(String),
}

impl From<PolarsError> for Error {
    fn from(err: PolarsError) -> Self {
        Error::StadiumData(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
