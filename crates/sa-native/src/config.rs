//! Forecaster configuration

use crate::models::ForecastPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `FORECAST_POLICY=pass_through`
const ENV_PREFIX: &str = "FORECAST";

/// Forecaster configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Naive policy used by [`crate::Forecaster::from_config`]
    #[serde(default)]
    pub policy: ForecastPolicy,

    /// Record Prometheus metrics for each forecast
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

fn default_metrics_enabled() -> bool {
    true
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            policy: ForecastPolicy::default(),
            metrics_enabled: default_metrics_enabled(),
        }
    }
}

impl ForecastConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        Self::build(None, Self::environment())
    }

    /// Load configuration from a file, with environment overrides on top
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(Some(path.as_ref()), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
    }

    fn build(file: Option<&Path>, env: config::Environment) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("policy", defaults.policy.as_str())?
            .set_default("metrics_enabled", defaults.metrics_enabled)?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(env)
            .build()
            .context("Failed to read forecast configuration")?;

        settings
            .try_deserialize()
            .context("Invalid forecast configuration")
    }
}
