//! Property tests for the scoring engine's public invariants.

use aqscore::scoring::category::{AqiLevel, Scheme, classify};
use aqscore::scoring::trend::{Direction, trend};
use aqscore::scoring::{adjusted_aqi, composite_score};
use aqscore::{RawReading, Reading, SCORE_HISTORY_CAP, ScoreHistory, ScoreSample};
use proptest::prelude::*;

// ── Rolling window ────────────────────────────────────────────

proptest! {
    /// Any number of appends leaves at most 20 samples: the most recent
    /// ones, in insertion order.
    #[test]
    fn history_keeps_most_recent_in_order(
        scores in proptest::collection::vec(0u8..=100, 0..60),
    ) {
        let mut h = ScoreHistory::new();
        for (i, score) in scores.iter().enumerate() {
            h.push(ScoreSample { score: *score, timestamp: i as u64 });
        }

        let expected_len = scores.len().min(SCORE_HISTORY_CAP);
        prop_assert_eq!(h.len(), expected_len);

        let kept: Vec<u8> = h.iter().map(|s| s.score).collect();
        prop_assert_eq!(&kept[..], &scores[scores.len() - expected_len..]);

        let stamps: Vec<u64> = h.iter().map(|s| s.timestamp).collect();
        prop_assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }
}

// ── Trend ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn constant_series_is_stable(v in 1.0f64..500.0, n in 0usize..20) {
        prop_assert_eq!(trend(&vec![v; n]).direction, Direction::Stable);
    }

    #[test]
    fn tripling_is_increasing(v in 1.0f64..500.0) {
        let series = [v, v, v, v * 3.0, v * 3.0, v * 3.0];
        prop_assert_eq!(trend(&series).direction, Direction::Increasing);
    }
}

// ── Scoring ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_aqi_lands_in_exactly_one_tier(aqi in 0.0f64..10_000.0) {
        let level = classify(aqi, Scheme::SixTier).level;
        let expected = if aqi <= 50.0 {
            AqiLevel::Good
        } else if aqi <= 100.0 {
            AqiLevel::Moderate
        } else if aqi <= 150.0 {
            AqiLevel::UnhealthyForSensitiveGroups
        } else if aqi <= 200.0 {
            AqiLevel::Unhealthy
        } else if aqi <= 300.0 {
            AqiLevel::VeryUnhealthy
        } else {
            AqiLevel::Hazardous
        };
        prop_assert_eq!(level, expected);
    }

    #[test]
    fn comfortable_conditions_never_adjust(aqi in 0.0f64..500.0, t in 18.0f64..=25.0, h in 40.0f64..=60.0) {
        prop_assert_eq!(adjusted_aqi(aqi, t, h), aqi.round() as i64);
    }

    #[test]
    fn arbitrary_json_numbers_never_panic(
        aqi in proptest::option::of(-1e6f64..1e6),
        legacy in proptest::option::of(-1e6f64..1e6),
        t in proptest::option::of(-100.0f64..100.0),
        h in proptest::option::of(-10.0f64..110.0),
    ) {
        let raw = RawReading {
            aqi,
            pollution_level: legacy,
            temperature: t,
            humidity: h,
            ..RawReading::default()
        };
        let reading: Reading = raw.normalize();
        prop_assert_eq!(reading.aqi, aqi.or(legacy));
        prop_assert!(composite_score(&reading) <= 100);
    }
}
