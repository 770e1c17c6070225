//! Policy-driven forecaster
//!
//! Validates inputs up front, dispatches to the configured strategy and
//! records the outcome in logs and metrics.

use super::validation::{validate_horizon, validate_series};
use crate::config::ForecastConfig;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastPolicy, Horizon};
use crate::observability::{ForecastMetrics, StructuredLogger};

/// Stateless forecaster bound to a single naive policy
#[derive(Clone)]
pub struct Forecaster {
    policy: ForecastPolicy,
    metrics: Option<ForecastMetrics>,
    logger: StructuredLogger,
}

impl Forecaster {
    pub fn new(policy: ForecastPolicy) -> Self {
        Self {
            policy,
            metrics: Some(ForecastMetrics::new()),
            logger: StructuredLogger::new("forecaster"),
        }
    }

    pub fn from_config(config: &ForecastConfig) -> Self {
        let forecaster = Self::new(config.policy);
        if config.metrics_enabled {
            forecaster
        } else {
            forecaster.without_metrics()
        }
    }

    /// Stop recording Prometheus metrics for this forecaster
    pub fn without_metrics(mut self) -> Self {
        self.metrics = None;
        self
    }

    pub fn policy(&self) -> ForecastPolicy {
        self.policy
    }

    /// Forecast `horizon` steps from `series`
    ///
    /// # Arguments
    /// * `series` - Observations, oldest first. Must not be empty
    /// * `horizon` - Raw number of steps to predict. Must be at least 1
    ///
    /// # Errors
    /// Returns [`ForecastError::InvalidInput`] for an empty series (checked
    /// first) or a non-positive horizon. Nothing is computed in either case.
    pub fn predict(&self, series: &[f64], horizon: i64) -> Result<Vec<f64>> {
        let horizon = validate_series(series)
            .and_then(|()| validate_horizon(horizon))
            .map_err(|err| self.reject(err))?;
        self.run(series, horizon)
    }

    /// Forecast with an already validated horizon
    pub fn forecast(&self, series: &[f64], horizon: Horizon) -> Result<Vec<f64>> {
        validate_series(series).map_err(|err| self.reject(err))?;
        self.run(series, horizon)
    }

    /// Forecast as many steps as there are observations
    pub fn predict_implied(&self, series: &[f64]) -> Result<Vec<f64>> {
        let horizon = validate_series(series)
            .and_then(|()| Horizon::try_from(series.len()))
            .map_err(|err| self.reject(err))?;
        self.run(series, horizon)
    }

    fn run(&self, series: &[f64], horizon: Horizon) -> Result<Vec<f64>> {
        let strategy = self.policy.strategy();
        let values = strategy
            .forecast(series, horizon)
            .map_err(|err| self.reject(err))?;
        debug_assert_eq!(values.len(), horizon.get());

        self.logger
            .log_forecast(strategy.name(), series.len(), horizon.get());
        if let Some(metrics) = &self.metrics {
            metrics.inc_forecasts(strategy.name());
            metrics.observe_horizon(horizon.get());
        }
        Ok(values)
    }

    fn reject(&self, err: ForecastError) -> ForecastError {
        let cause = err.cause();
        self.logger
            .log_rejected(self.policy.as_str(), cause.as_str(), &err.to_string());
        if let Some(metrics) = &self.metrics {
            metrics.inc_invalid_inputs(cause.as_str());
        }
        err
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(ForecastPolicy::default())
    }
}
