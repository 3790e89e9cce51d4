//! Engine configuration parameters
//!
//! All tunable policy for the scoring engine.  The numeric thresholds of
//! the scoring formulas themselves are fixed constants in
//! [`crate::scoring`]; only caller-facing choices live here.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scoring::category::Scheme;

/// How out-of-domain AQI input (negative or NaN) is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AqiPolicy {
    /// Treat the value as 0.
    #[default]
    Clamp,
    /// Reject with [`Error::InvalidValue`].
    Strict,
}

/// Core engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Negative / NaN AQI handling.
    pub aqi_policy: AqiPolicy,
    /// Scheme used for the status shown alongside each ingested reading.
    pub display_scheme: Scheme,
    /// Number of trailing readings in the daily window.
    pub daily_window: usize,
    /// Report a trend only once the score history holds this many samples.
    pub min_trend_samples: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            aqi_policy: AqiPolicy::Clamp,
            // Live cards use the simplified scheme; the map uses six tiers.
            display_scheme: Scheme::ThreeTier,
            daily_window: 24,
            min_trend_samples: 2,
        }
    }
}

impl EngineConfig {
    /// Strict-mode defaults for test harnesses.
    pub fn strict() -> Self {
        Self {
            aqi_policy: AqiPolicy::Strict,
            ..Self::default()
        }
    }

    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<()> {
        if self.daily_window == 0 {
            return Err(Error::Config("daily_window must be at least 1"));
        }
        if self.min_trend_samples < 2 {
            return Err(Error::Config("min_trend_samples must be at least 2"));
        }
        if self.min_trend_samples > crate::history::SCORE_HISTORY_CAP {
            return Err(Error::Config("min_trend_samples exceeds history capacity"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config document.  Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("parsing engine config")?;
        config.validate().context("validating engine config")?;
        Ok(config)
    }
}
