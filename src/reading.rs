//! Sensor readings at the input boundary.
//!
//! [`RawReading`] mirrors the JSON payload written by the ingestion side
//! one-to-one, including the legacy `pollution_level` field.  Call
//! [`RawReading::normalize`] once to obtain a [`Reading`]; nothing past this
//! module looks at field aliases again.
//!
//! ## Fallback policies
//!
//! `aqi`, `temperature` and `humidity` stay `Option` on [`Reading`] because
//! two call sites disagree on what "missing" means:
//!
//! - chart, status and statistics paths substitute `0`
//!   ([`Reading::aqi_or_zero`] and friends);
//! - the composite score substitutes a comfortable 25 °C / 50 % / AQI 50
//!   (see [`crate::scoring::composite`]).
//!
//! The estimated channels (`co2_estimate`, `tvoc_estimate`,
//! `pressure_estimate`) keep their gaps too; window averages substitute
//! outdoor baselines for them (see [`crate::stats`]).

use serde::{Deserialize, Serialize};

/// Raw reading as stored by the ingestion collaborator (wire format).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReading {
    /// Capture time, seconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: u64,
    pub aqi: Option<f64>,
    /// Legacy name for `aqi` written by older sensor firmware.
    pub pollution_level: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub co2: Option<f64>,
    /// Name used by the enhanced firmware for `co2`.
    pub co2_estimate: Option<f64>,
    pub tvoc_estimate: Option<f64>,
    pub pressure_estimate: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
    /// Per-interval deltas computed on the device.
    pub temp_trend: Option<f64>,
    pub hum_trend: Option<f64>,
    pub aqi_trend: Option<f64>,
    #[serde(alias = "gasDetected")]
    pub gas_detected: Option<bool>,
    pub device_id: Option<String>,
    pub location: Option<String>,
    pub wifi_rssi: Option<i32>,
}

impl RawReading {
    /// Coalesce aliases and apply the pollutant defaults.
    pub fn normalize(self) -> Reading {
        Reading {
            timestamp: self.timestamp,
            aqi: coalesce(&[self.aqi, self.pollution_level]),
            temperature: self.temperature,
            humidity: self.humidity,
            pm25: self.pm25.unwrap_or(0.0),
            pm10: self.pm10.unwrap_or(0.0),
            co2: coalesce(&[self.co2, self.co2_estimate]),
            tvoc: self.tvoc_estimate,
            pressure: self.pressure_estimate,
            no2: self.no2.unwrap_or(0.0),
            o3: self.o3.unwrap_or(0.0),
            temp_trend: self.temp_trend.unwrap_or(0.0),
            hum_trend: self.hum_trend.unwrap_or(0.0),
            aqi_trend: self.aqi_trend.unwrap_or(0.0),
            gas_detected: self.gas_detected.unwrap_or(false),
            device_id: self.device_id,
            location: self.location,
            wifi_rssi: self.wifi_rssi,
        }
    }

    /// Parse a JSON document and normalize it in one step.
    pub fn parse_json(json: &str) -> serde_json::Result<Reading> {
        serde_json::from_str::<Self>(json).map(Self::normalize)
    }
}

/// First present value among the known aliases, in priority order.
pub fn coalesce(aliases: &[Option<f64>]) -> Option<f64> {
    aliases.iter().copied().flatten().next()
}

/// One timestamped sensor observation.  Immutable once captured.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reading {
    pub timestamp: u64,
    pub aqi: Option<f64>,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity, percent.
    pub humidity: Option<f64>,
    pub pm25: f64,
    pub pm10: f64,
    /// Absent CO2 is treated as the 400 ppm baseline by window averages and
    /// as 0 elsewhere, so the raw option is kept.
    pub co2: Option<f64>,
    /// Total VOC estimate, ppm.
    pub tvoc: Option<f64>,
    /// Barometric pressure estimate, hPa.
    pub pressure: Option<f64>,
    pub no2: f64,
    pub o3: f64,
    /// Device-reported change since the previous reading, °C.
    pub temp_trend: f64,
    /// Same, percentage points of relative humidity.
    pub hum_trend: f64,
    pub aqi_trend: f64,
    pub gas_detected: bool,
    pub device_id: Option<String>,
    pub location: Option<String>,
    pub wifi_rssi: Option<i32>,
}

impl Reading {
    /// Reading with the three core channels set; everything else default.
    pub fn new(timestamp: u64, aqi: f64, temperature: f64, humidity: f64) -> Self {
        Self {
            timestamp,
            aqi: Some(aqi),
            temperature: Some(temperature),
            humidity: Some(humidity),
            ..Self::default()
        }
    }

    pub fn aqi_or_zero(&self) -> f64 {
        self.aqi.unwrap_or(0.0)
    }

    pub fn temperature_or_zero(&self) -> f64 {
        self.temperature.unwrap_or(0.0)
    }

    pub fn humidity_or_zero(&self) -> f64 {
        self.humidity.unwrap_or(0.0)
    }

    pub fn co2_or_zero(&self) -> f64 {
        self.co2.unwrap_or(0.0)
    }
}
