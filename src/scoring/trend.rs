//! Trend detection.
//!
//! Two heuristics, neither of them statistical:
//!
//! - [`trend`] compares the mean of the last three samples of a series
//!   against the mean of the first three and reports the percent change.
//! - [`trend_status`] grades a per-interval delta reported by the sensor
//!   itself against per-metric thresholds.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reading::Reading;

/// Samples averaged at each end of the series.
const TREND_SPAN: usize = 3;
/// Percent change beyond which a series counts as moving.
const TREND_THRESHOLD_PCT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub direction: Direction,
    /// Percent change of the recent mean relative to the earlier mean.
    pub magnitude: f64,
}

impl Trend {
    pub const STABLE: Self = Self {
        direction: Direction::Stable,
        magnitude: 0.0,
    };
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Strict variant: an undefined percent change is an error.
pub fn try_trend(series: &[f64]) -> Result<Trend> {
    if series.len() < 2 {
        return Ok(Trend::STABLE);
    }
    let span = TREND_SPAN.min(series.len());
    let earlier = mean(&series[..span]);
    let recent = mean(&series[series.len() - span..]);
    if earlier == 0.0 {
        return Err(Error::DivideByZero);
    }

    let change = (recent - earlier) / earlier * 100.0;
    if !change.is_finite() {
        return Err(Error::DivideByZero);
    }
    let direction = if change > TREND_THRESHOLD_PCT {
        Direction::Increasing
    } else if change < -TREND_THRESHOLD_PCT {
        Direction::Decreasing
    } else {
        Direction::Stable
    };
    Ok(Trend {
        direction,
        magnitude: change,
    })
}

/// Trend of `series` (oldest first).  A zero baseline reports stable.
pub fn trend(series: &[f64]) -> Trend {
    try_trend(series).unwrap_or(Trend::STABLE)
}

// ---------------------------------------------------------------------------
// Sensor-reported deltas
// ---------------------------------------------------------------------------

/// Channel a delta belongs to; each has its own thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Temperature,
    Humidity,
    Aqi,
}

impl Metric {
    /// `(significant, moderate)` absolute-delta thresholds.
    const fn thresholds(self) -> (f64, f64) {
        match self {
            Self::Temperature => (2.0, 1.0),
            Self::Humidity => (10.0, 5.0),
            Self::Aqi => (20.0, 10.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intensity {
    Significant,
    Moderate,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendStatus {
    pub direction: Direction,
    pub intensity: Intensity,
    pub color: &'static str,
}

pub fn trend_status(delta: f64, metric: Metric) -> TrendStatus {
    let (significant, moderate) = metric.thresholds();
    let magnitude = delta.abs();
    let direction = if delta > 0.0 {
        Direction::Increasing
    } else {
        Direction::Decreasing
    };

    if magnitude >= significant {
        TrendStatus {
            direction,
            intensity: Intensity::Significant,
            color: if delta > 0.0 { "#FF4444" } else { "#44FF44" },
        }
    } else if magnitude >= moderate {
        TrendStatus {
            direction,
            intensity: Intensity::Moderate,
            color: if delta > 0.0 { "#FF8844" } else { "#44FF88" },
        }
    } else {
        TrendStatus {
            direction: Direction::Stable,
            intensity: Intensity::Minimal,
            color: "#888888",
        }
    }
}

/// Graded device deltas for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeltaStatus {
    pub temperature: TrendStatus,
    pub humidity: TrendStatus,
    pub aqi: TrendStatus,
}

pub fn delta_status(reading: &Reading) -> DeltaStatus {
    DeltaStatus {
        temperature: trend_status(reading.temp_trend, Metric::Temperature),
        humidity: trend_status(reading.hum_trend, Metric::Humidity),
        aqi: trend_status(reading.aqi_trend, Metric::Aqi),
    }
}
