//! Composite 0–100 air quality score.
//!
//! `score = round((temp × 0.3 + humidity × 0.3 + aqi × 0.4) × 100)`
//!
//! | Factor      | 1.0          | 0.8          | otherwise |
//! |-------------|--------------|--------------|-----------|
//! | temperature | 18–25 °C     | 15–28 °C     | 0.6       |
//! | humidity    | 40–60 %      | 30–70 %      | 0.6       |
//! | AQI         | ≤110 → 1.0   | ≤200 → 0.6   | 0.3       |
//!
//! The AQI factor uses the simplified 110/200 thresholds, not the six-tier
//! table in [`super::category`].  The two disagree (AQI 75 is "Moderate"
//! on the map yet scores a full AQI factor here) and are kept separate.

use serde::Serialize;

use crate::reading::Reading;

const TEMPERATURE_WEIGHT: f64 = 0.3;
const HUMIDITY_WEIGHT: f64 = 0.3;
const AQI_WEIGHT: f64 = 0.4;

/// Stand-ins for channels missing from a reading.
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_HUMIDITY: f64 = 50.0;
pub const DEFAULT_AQI: f64 = 50.0;

pub fn temperature_factor(celsius: f64) -> f64 {
    if (18.0..=25.0).contains(&celsius) {
        1.0
    } else if (15.0..=28.0).contains(&celsius) {
        0.8
    } else {
        0.6
    }
}

pub fn humidity_factor(percent: f64) -> f64 {
    if (40.0..=60.0).contains(&percent) {
        1.0
    } else if (30.0..=70.0).contains(&percent) {
        0.8
    } else {
        0.6
    }
}

pub fn aqi_factor(aqi: f64) -> f64 {
    if aqi <= 110.0 {
        1.0
    } else if aqi <= 200.0 {
        0.6
    } else {
        0.3
    }
}

/// Per-factor breakdown shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreFactors {
    pub temperature: f64,
    pub humidity: f64,
    pub aqi: f64,
}

impl ScoreFactors {
    /// Weighted blend, rounded and clamped to 0–100.
    pub fn score(&self) -> u8 {
        let blended = self.temperature * TEMPERATURE_WEIGHT
            + self.humidity * HUMIDITY_WEIGHT
            + self.aqi * AQI_WEIGHT;
        (blended * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Factors as whole percentages, e.g. `(100, 80, 60)`.
    pub fn as_percentages(&self) -> (u8, u8, u8) {
        let pct = |f: f64| (f * 100.0).round() as u8;
        (pct(self.temperature), pct(self.humidity), pct(self.aqi))
    }
}

/// Factor breakdown for a reading, filling gaps with the comfort defaults.
pub fn factors(reading: &Reading) -> ScoreFactors {
    ScoreFactors {
        temperature: temperature_factor(reading.temperature.unwrap_or(DEFAULT_TEMPERATURE)),
        humidity: humidity_factor(reading.humidity.unwrap_or(DEFAULT_HUMIDITY)),
        aqi: aqi_factor(reading.aqi.unwrap_or(DEFAULT_AQI)),
    }
}

pub fn composite_score(reading: &Reading) -> u8 {
    factors(reading).score()
}

// ---------------------------------------------------------------------------
// Score status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreGrade {
    Excellent,
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreStatus {
    pub grade: ScoreGrade,
    pub label: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
}

pub fn score_status(score: u8) -> ScoreStatus {
    let (grade, label, color, bg_color) = match score {
        80.. => (ScoreGrade::Excellent, "Excellent", "#00E400", "#E8F5E8"),
        60..=79 => (ScoreGrade::Good, "Good", "#88FF00", "#F0F8E8"),
        40..=59 => (ScoreGrade::Moderate, "Moderate", "#FFFF00", "#FFFFF0"),
        20..=39 => (ScoreGrade::Poor, "Poor", "#FF8800", "#FFF4E6"),
        _ => (ScoreGrade::VeryPoor, "Very Poor", "#FF0000", "#FFE6E6"),
    };
    ScoreStatus {
        grade,
        label,
        color,
        bg_color,
    }
}
