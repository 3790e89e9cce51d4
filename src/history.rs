//! Rolling composite-score history.
//!
//! Holds the last [`SCORE_HISTORY_CAP`] samples for one stream of readings
//! (one dashboard session).  Appending to a full window evicts the oldest
//! sample; nothing else ever removes one.
//!
//! Backed by a fixed-capacity `heapless::Deque`, so the window never
//! allocates after construction.

use heapless::Deque;
use serde::{Deserialize, Serialize};

use crate::scoring::trend::{Trend, trend};

pub const SCORE_HISTORY_CAP: usize = 20;

/// One composite score and the time it was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSample {
    /// 0–100.
    pub score: u8,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreHistory {
    samples: Deque<ScoreSample, SCORE_HISTORY_CAP>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample, evicting the oldest when full.  Returns the evicted
    /// sample, if any.
    pub fn push(&mut self, sample: ScoreSample) -> Option<ScoreSample> {
        let evicted = if self.samples.is_full() {
            self.samples.pop_front()
        } else {
            None
        };
        // Cannot fail: a slot was just freed if the deque was full.
        let _ = self.samples.push_back(sample);
        evicted
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&ScoreSample> {
        self.samples.back()
    }

    /// Samples in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreSample> {
        self.samples.iter()
    }

    /// Copy of the current window, oldest first.
    pub fn snapshot(&self) -> heapless::Vec<ScoreSample, SCORE_HISTORY_CAP> {
        self.samples.iter().copied().collect()
    }

    /// Scores as an `f64` series, ready for [`trend`].
    pub fn scores(&self) -> heapless::Vec<f64, SCORE_HISTORY_CAP> {
        self.samples.iter().map(|s| f64::from(s.score)).collect()
    }

    pub fn trend(&self) -> Trend {
        trend(&self.scores())
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
