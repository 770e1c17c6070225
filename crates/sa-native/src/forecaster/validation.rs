//! Precondition checks run before any forecast is computed

use crate::error::{ForecastError, Result};
use crate::models::Horizon;

/// Reject a series with no observations
pub fn validate_series(series: &[f64]) -> Result<()> {
    if series.is_empty() {
        return Err(ForecastError::empty_series());
    }
    Ok(())
}

/// Turn a raw caller horizon into a [`Horizon`]
pub fn validate_horizon(raw: i64) -> Result<Horizon> {
    Horizon::new(raw)
}
