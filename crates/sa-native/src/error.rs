//! Error types for forecasting
//!
//! Every failure is an invalid-input failure raised before any computation
//! starts. The cause enum keeps the individual preconditions distinguishable.

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors returned by the forecasting entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInputCause),
}

/// The violated precondition behind an [`ForecastError::InvalidInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInputCause {
    #[error("empty series, at least one observation is required")]
    EmptySeries,

    #[error("non-positive horizon {horizon}, expected at least 1")]
    NonPositiveHorizon { horizon: i64 },

    /// Pass-through can only reproduce the observed length
    #[error("horizon mismatch, pass-through needs horizon {expected} but got {got}")]
    HorizonMismatch { expected: usize, got: usize },

    #[error("horizon {horizon} exceeds the addressable size on this platform")]
    HorizonTooLarge { horizon: i64 },
}

impl InvalidInputCause {
    /// Stable label for metrics and log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidInputCause::EmptySeries => "empty_series",
            InvalidInputCause::NonPositiveHorizon { .. } => "non_positive_horizon",
            InvalidInputCause::HorizonMismatch { .. } => "horizon_mismatch",
            InvalidInputCause::HorizonTooLarge { .. } => "horizon_too_large",
        }
    }
}

impl ForecastError {
    pub fn empty_series() -> Self {
        ForecastError::InvalidInput(InvalidInputCause::EmptySeries)
    }

    pub fn non_positive_horizon(horizon: i64) -> Self {
        ForecastError::InvalidInput(InvalidInputCause::NonPositiveHorizon { horizon })
    }

    pub fn horizon_mismatch(expected: usize, got: usize) -> Self {
        ForecastError::InvalidInput(InvalidInputCause::HorizonMismatch { expected, got })
    }

    pub fn horizon_too_large(horizon: i64) -> Self {
        ForecastError::InvalidInput(InvalidInputCause::HorizonTooLarge { horizon })
    }

    /// The precondition that was violated
    pub fn cause(&self) -> InvalidInputCause {
        match self {
            ForecastError::InvalidInput(cause) => *cause,
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ForecastError> for pyo3::PyErr {
    fn from(err: ForecastError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
