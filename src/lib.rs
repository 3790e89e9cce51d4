//! AQScore — air-quality scoring and classification engine.
//!
//! Turns raw sensor readings (temperature, humidity, AQI, particulates,
//! gas) into the labels, adjusted indices, composite scores and trends a
//! monitoring dashboard displays.  The scoring functions in [`scoring`]
//! are pure; [`app::service::ScoringService`] adds the per-session score
//! history and event emission on top.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod reading;
pub mod scoring;
pub mod stats;

pub use config::{AqiPolicy, EngineConfig};
pub use error::{Error, Result};
pub use history::{SCORE_HISTORY_CAP, ScoreHistory, ScoreSample};
pub use reading::{RawReading, Reading};
