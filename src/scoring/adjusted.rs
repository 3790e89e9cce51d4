//! Temperature/humidity-weighted AQI.
//!
//! The environmental stress factor (ESF) inflates raw AQI when the air is
//! uncomfortably hot, cold, dry or humid:
//!
//! ```text
//! temperature  <15 | 15..18 | 18..=25 | 25..=30 | >30
//! multiplier   1.2 |  1.1   |   1.0   |   1.1   | 1.2      (lower bound of 25..=30 is exclusive)
//!
//! humidity     <30 | 30..40 | 40..=60 | 60..=70 | >70
//! multiplier   1.2 |  1.1   |   1.0   |   1.1   | 1.2      (lower bound of 60..=70 is exclusive)
//! ```
//!
//! `ESF = temperature multiplier × humidity multiplier`.

use serde::Serialize;

use crate::reading::Reading;

/// Adjusted AQI strictly above this value is reported as harmful.
pub const HARMFUL_ADJUSTED_AQI: i64 = 110;

const MILD_STRESS: f64 = 1.1;
const HIGH_STRESS: f64 = 1.2;

pub fn temperature_stress(celsius: f64) -> f64 {
    if !(15.0..=30.0).contains(&celsius) {
        HIGH_STRESS
    } else if !(18.0..=25.0).contains(&celsius) {
        MILD_STRESS
    } else {
        1.0
    }
}

pub fn humidity_stress(percent: f64) -> f64 {
    if !(30.0..=70.0).contains(&percent) {
        HIGH_STRESS
    } else if !(40.0..=60.0).contains(&percent) {
        MILD_STRESS
    } else {
        1.0
    }
}

/// Environmental stress factor for the given conditions.
pub fn stress_factor(temperature: f64, humidity: f64) -> f64 {
    temperature_stress(temperature) * humidity_stress(humidity)
}

/// `round(aqi × ESF)`.
pub fn adjusted_aqi(aqi: f64, temperature: f64, humidity: f64) -> i64 {
    (aqi * stress_factor(temperature, humidity)).round() as i64
}

pub fn is_harmful(adjusted: i64) -> bool {
    adjusted > HARMFUL_ADJUSTED_AQI
}

/// Full adjusted-AQI breakdown for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustedAqi {
    pub raw: f64,
    pub esf: f64,
    pub adjusted: i64,
    pub harmful: bool,
}

/// Assess a reading.  Missing channels count as 0, matching the chart view.
pub fn assess(reading: &Reading) -> AdjustedAqi {
    let raw = reading.aqi_or_zero();
    let esf = stress_factor(reading.temperature_or_zero(), reading.humidity_or_zero());
    let adjusted = (raw * esf).round() as i64;
    AdjustedAqi {
        raw,
        esf,
        adjusted,
        harmful: is_harmful(adjusted),
    }
}
