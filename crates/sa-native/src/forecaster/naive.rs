//! Baseline strategies
//!
//! Values are copied verbatim from the input. No arithmetic is applied so the
//! output is bitwise identical to the observations it came from.

use super::NaiveStrategy;
use crate::error::{ForecastError, Result};
use crate::models::Horizon;

/// Flat-line extrapolation: every step repeats the last observation
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatLast;

impl NaiveStrategy for RepeatLast {
    fn name(&self) -> &'static str {
        "repeat_last"
    }

    fn forecast(&self, series: &[f64], horizon: Horizon) -> Result<Vec<f64>> {
        let last = *series.last().ok_or_else(ForecastError::empty_series)?;
        let steps = horizon.get();
        let mut values = Vec::new();
        values.try_reserve_exact(steps).map_err(|_| {
            ForecastError::horizon_too_large(i64::try_from(steps).unwrap_or(i64::MAX))
        })?;
        values.resize(steps, last);
        Ok(values)
    }
}

/// Identity baseline: the observations are returned unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl NaiveStrategy for PassThrough {
    fn name(&self) -> &'static str {
        "pass_through"
    }

    fn forecast(&self, series: &[f64], horizon: Horizon) -> Result<Vec<f64>> {
        if series.is_empty() {
            return Err(ForecastError::empty_series());
        }
        if horizon.get() != series.len() {
            return Err(ForecastError::horizon_mismatch(series.len(), horizon.get()));
        }
        Ok(series.to_vec())
    }
}
