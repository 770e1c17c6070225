//! Core data models for forecasting

use crate::error::{ForecastError, Result};
use crate::forecaster::{NaiveStrategy, PassThrough, RepeatLast};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

/// Largest horizon whose output buffer can be allocated
pub const MAX_HORIZON: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Number of future steps to predict, always between 1 and [`MAX_HORIZON`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Horizon(NonZeroUsize);

impl Horizon {
    /// Validate a raw caller-supplied horizon
    pub fn new(raw: i64) -> Result<Self> {
        let steps = match usize::try_from(raw) {
            Ok(steps) => steps,
            Err(_) if raw < 0 => return Err(ForecastError::non_positive_horizon(raw)),
            Err(_) => return Err(ForecastError::horizon_too_large(raw)),
        };
        let steps = NonZeroUsize::new(steps).ok_or_else(|| ForecastError::non_positive_horizon(raw))?;
        if steps.get() > MAX_HORIZON {
            return Err(ForecastError::horizon_too_large(raw));
        }
        Ok(Horizon(steps))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for Horizon {
    type Error = ForecastError;

    fn try_from(raw: i64) -> Result<Self> {
        Horizon::new(raw)
    }
}

impl TryFrom<usize> for Horizon {
    type Error = ForecastError;

    fn try_from(steps: usize) -> Result<Self> {
        let steps = NonZeroUsize::new(steps).ok_or_else(|| ForecastError::non_positive_horizon(0))?;
        if steps.get() > MAX_HORIZON {
            let raw = i64::try_from(steps.get()).unwrap_or(i64::MAX);
            return Err(ForecastError::horizon_too_large(raw));
        }
        Ok(Horizon(steps))
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Naive forecasting policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastPolicy {
    /// Flat-line extrapolation of the last observation
    #[default]
    #[serde(alias = "last", alias = "naive")]
    RepeatLast,
    /// Return the observations unchanged
    #[serde(alias = "identity")]
    PassThrough,
}

impl ForecastPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastPolicy::RepeatLast => "repeat_last",
            ForecastPolicy::PassThrough => "pass_through",
        }
    }

    /// Strategy implementing this policy
    pub fn strategy(&self) -> &'static dyn NaiveStrategy {
        match self {
            ForecastPolicy::RepeatLast => &RepeatLast,
            ForecastPolicy::PassThrough => &PassThrough,
        }
    }
}

impl fmt::Display for ForecastPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a policy name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown forecast policy '{0}', expected repeat_last or pass_through")]
pub struct UnknownPolicy(pub String);

impl FromStr for ForecastPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "repeat_last" | "last" | "naive" => Ok(ForecastPolicy::RepeatLast),
            "pass_through" | "identity" => Ok(ForecastPolicy::PassThrough),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
