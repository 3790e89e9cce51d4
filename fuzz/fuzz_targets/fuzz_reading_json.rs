//! Fuzz target: `RawReading::parse_json` → full scoring pipeline
//!
//! Feeds arbitrary bytes through the JSON input boundary and, whenever they
//! parse, through every scoring function and the service.  Nothing may
//! panic and every score must stay within 0–100.
//!
//! cargo fuzz run fuzz_reading_json

#![no_main]

use aqscore::adapters::log_sink::LogEventSink;
use aqscore::app::service::ScoringService;
use aqscore::scoring::{Scheme, assess, classify, composite_score};
use aqscore::{EngineConfig, RawReading};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(reading) = RawReading::parse_json(text) else {
        return;
    };

    let aqi = reading.aqi_or_zero();
    let _ = classify(aqi, Scheme::SixTier);
    let _ = classify(aqi, Scheme::ThreeTier);
    let _ = assess(&reading);
    assert!(composite_score(&reading) <= 100, "composite score out of range");

    let mut svc = ScoringService::new(EngineConfig::strict());
    let mut sink = LogEventSink::new();
    if let Ok(report) = svc.ingest(&reading, &mut sink) {
        assert!(report.score <= 100);
        assert!(report.trend.magnitude.is_finite());
    }
});
