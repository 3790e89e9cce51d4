//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! `log` facade.  A chart-feed or notification adapter would implement the
//! same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] as one tagged line.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::ReadingScored(s) => {
                info!(
                    "SCORE | t={} | AQI={:.0} adj={} ({:?}) | score={}% | trend={:?}",
                    s.timestamp, s.aqi, s.adjusted_aqi, s.level, s.score, s.trend,
                );
            }
            AppEvent::CategoryChanged { from, to } => {
                info!("CATEGORY | {:?} -> {:?}", from, to);
            }
            AppEvent::HarmfulAir { adjusted_aqi } => {
                warn!("HARMFUL | adjusted AQI {}", adjusted_aqi);
            }
            AppEvent::HarmfulAirCleared { adjusted_aqi } => {
                info!("HARMFUL | cleared, adjusted AQI {}", adjusted_aqi);
            }
            AppEvent::HistoryCleared => {
                info!("HISTORY | cleared");
            }
        }
    }
}
