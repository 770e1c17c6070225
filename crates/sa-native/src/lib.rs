//! Naive time-series forecasting
//!
//! This crate provides:
//! - Baseline forecasts (repeat-last-value and pass-through)
//! - Fail-fast input validation with typed errors
//! - Configuration, structured logging and Prometheus metrics
//! - Optional Python bindings (`python-bindings` feature)

pub mod config;
pub mod error;
pub mod forecaster;
pub mod models;
pub mod observability;

#[cfg(feature = "python-bindings")]
mod python;

pub use config::ForecastConfig;
pub use error::{ForecastError, InvalidInputCause, Result};
pub use forecaster::{Forecaster, NaiveStrategy, PassThrough, RepeatLast};
pub use models::{ForecastPolicy, Horizon, UnknownPolicy, MAX_HORIZON};
pub use observability::{init_tracing, ForecastMetrics, StructuredLogger};

/// Predict `horizon` future values by repeating the last observation
///
/// # Errors
/// [`ForecastError::InvalidInput`] if `series` is empty or `horizon < 1`.
pub fn predict_static(series: &[f64], horizon: i64) -> Result<Vec<f64>> {
    Forecaster::new(ForecastPolicy::RepeatLast).predict(series, horizon)
}

/// Pass-through baseline: returns `series` unchanged
///
/// # Errors
/// [`ForecastError::InvalidInput`] if `series` is empty.
pub fn predict(series: &[f64]) -> Result<Vec<f64>> {
    Forecaster::new(ForecastPolicy::PassThrough).predict_implied(series)
}
