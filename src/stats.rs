//! Window statistics over a series of readings.
//!
//! Feeds the daily summary panel: trailing window, per-channel averages and
//! extremes, plus the device's Wi-Fi link quality.  Missing channels use
//! the zero fallback, except the estimated channels: averages assume the
//! 400 ppm CO2, 0.1 ppm TVOC and 1013.25 hPa baselines for absent values.

use serde::Serialize;

use crate::reading::Reading;

const CO2_BASELINE_PPM: f64 = 400.0;
const TVOC_BASELINE_PPM: f64 = 0.1;
const PRESSURE_BASELINE_HPA: f64 = 1013.25;

/// Trailing `n` readings (all of them if fewer).
pub fn last_n(readings: &[Reading], n: usize) -> &[Reading] {
    &readings[readings.len().saturating_sub(n)..]
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    /// °C, one decimal.
    pub temperature: f64,
    /// %, one decimal.
    pub humidity: f64,
    pub aqi: i64,
    /// ppm, one decimal.
    pub co2: f64,
    /// ppm, two decimals.
    pub tvoc: f64,
    /// hPa, one decimal.
    pub pressure: f64,
}

pub fn averages(readings: &[Reading]) -> Option<Averages> {
    if readings.is_empty() {
        return None;
    }
    let n = readings.len() as f64;
    let sum = |f: fn(&Reading) -> f64| readings.iter().map(f).sum::<f64>();

    Some(Averages {
        temperature: round_to(sum(Reading::temperature_or_zero) / n, 1),
        humidity: round_to(sum(Reading::humidity_or_zero) / n, 1),
        aqi: (sum(Reading::aqi_or_zero) / n).round() as i64,
        co2: round_to(sum(|r| r.co2.unwrap_or(CO2_BASELINE_PPM)) / n, 1),
        tvoc: round_to(sum(|r| r.tvoc.unwrap_or(TVOC_BASELINE_PPM)) / n, 2),
        pressure: round_to(sum(|r| r.pressure.unwrap_or(PRESSURE_BASELINE_HPA)) / n, 1),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    fn over(readings: &[Reading], f: fn(&Reading) -> f64) -> Self {
        readings.iter().map(f).fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, v| Self {
                min: acc.min.min(v),
                max: acc.max.max(v),
            },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extremes {
    pub temperature: Range,
    pub humidity: Range,
    pub aqi: Range,
    pub co2: Range,
}

pub fn extremes(readings: &[Reading]) -> Option<Extremes> {
    if readings.is_empty() {
        return None;
    }
    Some(Extremes {
        temperature: Range::over(readings, Reading::temperature_or_zero),
        humidity: Range::over(readings, Reading::humidity_or_zero),
        aqi: Range::over(readings, Reading::aqi_or_zero),
        co2: Range::over(readings, Reading::co2_or_zero),
    })
}

/// Averages and extremes over the trailing daily window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailySummary {
    /// Readings actually covered (at most the configured window).
    pub samples: usize,
    pub averages: Averages,
    pub extremes: Extremes,
}

pub fn daily_summary(readings: &[Reading], window: usize) -> Option<DailySummary> {
    let day = last_n(readings, window);
    Some(DailySummary {
        samples: day.len(),
        averages: averages(day)?,
        extremes: extremes(day)?,
    })
}

// ---------------------------------------------------------------------------
// Wi-Fi link quality
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectionQuality {
    pub label: &'static str,
    pub color: &'static str,
    /// Signal bars, 1–5.
    pub strength: u8,
}

pub fn connection_quality(rssi_dbm: i32) -> ConnectionQuality {
    let (label, color, strength) = match rssi_dbm {
        -50.. => ("Excellent", "#00FF00", 5),
        -60..=-51 => ("Good", "#88FF00", 4),
        -70..=-61 => ("Fair", "#FFFF00", 3),
        -80..=-71 => ("Poor", "#FF8800", 2),
        _ => ("Very Poor", "#FF0000", 1),
    };
    ConnectionQuality {
        label,
        color,
        strength,
    }
}
