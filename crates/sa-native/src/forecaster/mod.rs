//! Naive forecasting engine

mod naive;
mod service;
mod validation;

pub use naive::{PassThrough, RepeatLast};
pub use service::Forecaster;
pub use validation::{validate_horizon, validate_series};

use crate::error::Result;
use crate::models::Horizon;

/// Trait for naive forecasting strategies
pub trait NaiveStrategy: Send + Sync {
    /// Policy name used in logs and metrics
    fn name(&self) -> &'static str;

    /// Produce exactly `horizon` predictions from `series`
    fn forecast(&self, series: &[f64], horizon: Horizon) -> Result<Vec<f64>>;
}
