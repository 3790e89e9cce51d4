//! Application service — the hexagonal core.
//!
//! [`ScoringService`] owns the engine configuration and the rolling score
//! history for one stream of readings.  It exposes a presentation-agnostic
//! API; all output flows through the [`EventSink`] port injected at call
//! sites, making the service testable with mock adapters.
//!
//! ```text
//!  Reading ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!              │        ScoringService         │
//!  AppCommand ▶│ classify · adjust · score ·   │ ──▶ ReadingReport
//!              │ trend · history               │
//!              └──────────────────────────────┘
//! ```

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::history::{ScoreHistory, ScoreSample};
use crate::reading::Reading;
use crate::scoring::adjusted::{self, AdjustedAqi};
use crate::scoring::category::{self, AqiLevel, Category, GasStatus, Scheme};
use crate::scoring::composite::{self, ScoreFactors, ScoreStatus};
use crate::scoring::trend::{DeltaStatus, Trend, delta_status};
use crate::stats::{self, DailySummary};

use super::commands::AppCommand;
use super::events::{AppEvent, ScoreSummary};
use super::ports::EventSink;

/// Everything the dashboard shows for one reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingReport {
    pub timestamp: u64,
    pub category: Category,
    pub adjusted: AdjustedAqi,
    pub factors: ScoreFactors,
    pub score: u8,
    pub status: ScoreStatus,
    pub gas: GasStatus,
    /// Trend of the score history after this reading was appended.
    pub trend: Trend,
    /// Device-reported deltas, graded per channel.
    pub deltas: DeltaStatus,
}

// ───────────────────────────────────────────────────────────────
// ScoringService
// ───────────────────────────────────────────────────────────────

/// Scores a stream of readings.  One instance per dashboard session; not
/// meant to be shared across threads.
pub struct ScoringService {
    config: EngineConfig,
    history: ScoreHistory,
    last_level: Option<AqiLevel>,
    harmful: bool,
    ingested: u64,
}

impl ScoringService {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            history: ScoreHistory::new(),
            last_level: None,
            harmful: false,
            ingested: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// Readings ingested since construction.
    pub fn ingested(&self) -> u64 {
        self.ingested
    }

    // ── Per-reading orchestration ─────────────────────────────

    /// Score one reading: classify → adjust → composite → history → trend.
    ///
    /// Under the strict AQI policy a negative or NaN AQI is rejected before
    /// any state changes.
    pub fn ingest(&mut self, reading: &Reading, sink: &mut impl EventSink) -> Result<ReadingReport> {
        let reading = self.sanitized(reading)?;
        self.ingested += 1;

        let category = category::classify(reading.aqi_or_zero(), self.config.display_scheme);
        let adjusted = adjusted::assess(&reading);
        let factors = composite::factors(&reading);
        let score = factors.score();

        if let Some(evicted) = self.history.push(ScoreSample {
            score,
            timestamp: reading.timestamp,
        }) {
            debug!("score history full, evicted sample @{}", evicted.timestamp);
        }
        let trend = if self.history.len() >= self.config.min_trend_samples {
            self.history.trend()
        } else {
            Trend::STABLE
        };

        // 1. Category edge
        if let Some(prev) = self.last_level.filter(|l| *l != category.level) {
            info!("AQI category {:?} -> {:?}", prev, category.level);
            sink.emit(&AppEvent::CategoryChanged {
                from: prev,
                to: category.level,
            });
        }
        self.last_level = Some(category.level);

        // 2. Harmful-air edge
        if adjusted.harmful && !self.harmful {
            warn!(
                "Harmful air: adjusted AQI {} (raw {:.0}, ESF {:.2})",
                adjusted.adjusted, adjusted.raw, adjusted.esf
            );
            sink.emit(&AppEvent::HarmfulAir {
                adjusted_aqi: adjusted.adjusted,
            });
        } else if !adjusted.harmful && self.harmful {
            info!("Harmful air cleared: adjusted AQI {}", adjusted.adjusted);
            sink.emit(&AppEvent::HarmfulAirCleared {
                adjusted_aqi: adjusted.adjusted,
            });
        }
        self.harmful = adjusted.harmful;

        // 3. Per-reading summary
        sink.emit(&AppEvent::ReadingScored(ScoreSummary {
            timestamp: reading.timestamp,
            aqi: reading.aqi_or_zero(),
            adjusted_aqi: adjusted.adjusted,
            level: category.level,
            score,
            trend: trend.direction,
        }));

        Ok(ReadingReport {
            timestamp: reading.timestamp,
            category,
            adjusted,
            factors,
            score,
            status: composite::score_status(score),
            gas: category::gas_status(reading.gas_detected),
            trend,
            deltas: delta_status(&reading),
        })
    }

    /// Averages and extremes over the trailing `daily_window` readings.
    /// `None` for an empty series.
    pub fn daily_summary(&self, readings: &[Reading]) -> Option<DailySummary> {
        stats::daily_summary(readings, self.config.daily_window)
    }

    // ── Command dispatch ──────────────────────────────────────

    /// Process an inbound command.  Returns the report for `Ingest`.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        sink: &mut impl EventSink,
    ) -> Result<Option<ReadingReport>> {
        match cmd {
            AppCommand::Ingest(reading) => self.ingest(&reading, sink).map(Some),
            AppCommand::SetScheme(scheme) => {
                self.set_scheme(scheme);
                Ok(None)
            }
            AppCommand::UpdateConfig(config) => {
                config.validate()?;
                info!("Config updated: {:?}", config);
                if config.display_scheme != self.config.display_scheme {
                    self.last_level = None;
                }
                self.config = config;
                Ok(None)
            }
            AppCommand::ClearHistory => {
                self.history.clear();
                info!("Score history cleared");
                sink.emit(&AppEvent::HistoryCleared);
                Ok(None)
            }
        }
    }

    pub fn set_scheme(&mut self, scheme: Scheme) {
        if scheme != self.config.display_scheme {
            info!("Display scheme {:?} -> {:?}", self.config.display_scheme, scheme);
            self.config.display_scheme = scheme;
            // Levels from different schemes are not comparable.
            self.last_level = None;
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn sanitized(&self, reading: &Reading) -> Result<Reading> {
        let mut reading = reading.clone();
        if let Some(aqi) = reading.aqi {
            let clean = category::sanitize_aqi(aqi, self.config.aqi_policy)?;
            if clean != aqi {
                warn!("AQI {} out of domain, clamped to {}", aqi, clean);
            }
            reading.aqi = Some(clean);
        }
        Ok(reading)
    }
}
