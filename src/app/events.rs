//! Outbound application events.
//!
//! The [`ScoringService`](super::service::ScoringService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them: log a line, push a chart
//! point, raise a banner.

use serde::Serialize;

use crate::scoring::category::AqiLevel;
use crate::scoring::trend::Direction;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AppEvent {
    /// A reading was ingested and scored.
    ReadingScored(ScoreSummary),

    /// The displayed AQI category changed between consecutive readings.
    CategoryChanged { from: AqiLevel, to: AqiLevel },

    /// Adjusted AQI crossed into harmful territory.
    HarmfulAir { adjusted_aqi: i64 },

    /// Adjusted AQI dropped back to a non-harmful level.
    HarmfulAirCleared { adjusted_aqi: i64 },

    /// The score history was cleared.
    HistoryCleared,
}

/// Compact per-reading summary suitable for logging or a chart feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub timestamp: u64,
    pub aqi: f64,
    pub adjusted_aqi: i64,
    pub level: AqiLevel,
    pub score: u8,
    pub trend: Direction,
}
