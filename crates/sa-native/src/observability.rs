//! Observability for forecasting
//!
//! Provides:
//! - Prometheus metrics (forecasts per policy, rejected inputs per cause, horizon sizes)
//! - Structured logging with tracing
//! - An opt-in JSON tracing subscriber (stderr) for hosts that do not install their own

use prometheus::{register_histogram, register_int_counter_vec, Histogram, IntCounterVec};
use std::sync::OnceLock;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Histogram buckets for requested horizons (in steps)
const HORIZON_BUCKETS: &[f64] = &[
    1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 10000.0,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<ForecastMetricsInner> = OnceLock::new();

struct ForecastMetricsInner {
    forecasts_total: IntCounterVec,
    invalid_inputs_total: IntCounterVec,
    forecast_horizon: Histogram,
}

impl ForecastMetricsInner {
    fn new() -> Self {
        Self {
            forecasts_total: register_int_counter_vec!(
                "sa_native_forecasts_total",
                "Total number of forecasts produced",
                &["policy"]
            )
            .expect("Failed to register forecasts_total"),

            invalid_inputs_total: register_int_counter_vec!(
                "sa_native_invalid_inputs_total",
                "Total number of forecast requests rejected as invalid input",
                &["cause"]
            )
            .expect("Failed to register invalid_inputs_total"),

            forecast_horizon: register_histogram!(
                "sa_native_forecast_horizon",
                "Number of steps requested per forecast",
                HORIZON_BUCKETS.to_vec()
            )
            .expect("Failed to register forecast_horizon"),
        }
    }
}

/// Forecast metrics for Prometheus exposition
///
/// Lightweight handle to the global metrics instance. Clones share the same
/// underlying metrics.
#[derive(Clone)]
pub struct ForecastMetrics {
    _private: (),
}

impl Default for ForecastMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastMetrics {
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ForecastMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &ForecastMetricsInner {
        GLOBAL_METRICS.get_or_init(ForecastMetricsInner::new)
    }

    pub fn inc_forecasts(&self, policy: &str) {
        self.inner()
            .forecasts_total
            .with_label_values(&[policy])
            .inc();
    }

    pub fn inc_invalid_inputs(&self, cause: &str) {
        self.inner()
            .invalid_inputs_total
            .with_label_values(&[cause])
            .inc();
    }

    pub fn observe_horizon(&self, steps: usize) {
        self.inner().forecast_horizon.observe(steps as f64);
    }

    pub fn forecasts_total(&self, policy: &str) -> u64 {
        self.inner()
            .forecasts_total
            .with_label_values(&[policy])
            .get()
    }

    pub fn invalid_inputs_total(&self, cause: &str) -> u64 {
        self.inner()
            .invalid_inputs_total
            .with_label_values(&[cause])
            .get()
    }
}

/// Structured logger for forecast events
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    component: String,
}

impl StructuredLogger {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    /// Log a produced forecast
    pub fn log_forecast(&self, policy: &str, series_len: usize, horizon: usize) {
        debug!(
            event = "forecast_generated",
            component = %self.component,
            policy = %policy,
            series_len = series_len,
            horizon = horizon,
            "Generated naive forecast"
        );
    }

    /// Log a request rejected during validation
    pub fn log_rejected(&self, policy: &str, cause: &str, details: &str) {
        debug!(
            event = "forecast_rejected",
            component = %self.component,
            policy = %policy,
            cause = %cause,
            details = %details,
            "Rejected forecast request"
        );
    }
}

/// Install a JSON tracing subscriber on stderr, filtered by `RUST_LOG` (default `info`)
///
/// Library code never calls this; the embedding host opts in. Returns `false`
/// when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_metrics_counters() {
        let metrics = ForecastMetrics::new();
        let before = metrics.forecasts_total("test_policy");

        metrics.inc_forecasts("test_policy");
        metrics.inc_forecasts("test_policy");
        metrics.observe_horizon(12);

        assert_eq!(metrics.forecasts_total("test_policy"), before + 2);
    }

    #[test]
    fn test_metrics_handles_share_state() {
        let a = ForecastMetrics::new();
        let b = a.clone();
        let before = b.invalid_inputs_total("test_cause");
        a.inc_invalid_inputs("test_cause");
        assert_eq!(b.invalid_inputs_total("test_cause"), before + 1);
    }

    #[test]
    fn test_metrics_exposed_in_default_registry() {
        ForecastMetrics::new().inc_forecasts("exposed");
        let names: Vec<String> = prometheus::gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.iter().any(|n| n == "sa_native_forecasts_total"));
    }

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("test-component");
        assert_eq!(logger.component, "test-component");
        logger.log_forecast("repeat_last", 3, 5);
        logger.log_rejected("repeat_last", "empty_series", "invalid input: empty series");
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        assert!(!init_tracing());
    }
}
