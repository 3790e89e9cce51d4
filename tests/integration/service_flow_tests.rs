//! Integration tests for the reading → ScoringService → events pipeline.

use super::mock_sink::RecordingSink;

use aqscore::app::commands::AppCommand;
use aqscore::app::events::AppEvent;
use aqscore::app::service::ScoringService;
use aqscore::scoring::category::{AqiLevel, Scheme};
use aqscore::scoring::{Direction, Intensity, ScoreGrade};
use aqscore::{EngineConfig, RawReading, Reading, SCORE_HISTORY_CAP};

fn make_service() -> (ScoringService, RecordingSink) {
    (ScoringService::new(EngineConfig::default()), RecordingSink::new())
}

// ── Wire payload → report ─────────────────────────────────────

#[test]
fn device_deltas_surface_in_report() {
    let (mut svc, mut sink) = make_service();
    let reading = RawReading::parse_json(
        r#"{"timestamp": 1717000300, "aqi": 50, "temperature": 24, "humidity": 55,
            "aqi_trend": 25, "hum_trend": -6, "temp_trend": 0.4}"#,
    )
    .unwrap();

    let report = svc.ingest(&reading, &mut sink).unwrap();

    assert_eq!(report.deltas.aqi.direction, Direction::Increasing);
    assert_eq!(report.deltas.aqi.intensity, Intensity::Significant);
    assert_eq!(report.deltas.aqi.color, "#FF4444");
    assert_eq!(report.deltas.humidity.direction, Direction::Decreasing);
    assert_eq!(report.deltas.humidity.intensity, Intensity::Moderate);
    assert_eq!(report.deltas.temperature.direction, Direction::Stable);
}

#[test]
fn daily_summary_covers_last_day_of_payloads() {
    let svc = ScoringService::new(EngineConfig::default());
    // 30 hourly readings; the first six carry no CO2 estimate.
    let readings: Vec<Reading> = (0..30u64)
        .map(|h| {
            let co2 = if h < 6 { String::new() } else { r#", "co2_estimate": 600"#.to_string() };
            RawReading::parse_json(&format!(
                r#"{{"timestamp": {}, "aqi": {}, "temperature": 25, "humidity": 50{co2}}}"#,
                h * 3600,
                40 + h
            ))
            .unwrap()
        })
        .collect();

    let day = svc.daily_summary(&readings).unwrap();

    assert_eq!(day.samples, 24);
    assert_eq!(day.averages.co2, 600.0);
    assert_eq!(day.extremes.aqi.min, 46.0);
    assert_eq!(day.extremes.aqi.max, 69.0);
    assert_eq!(day.averages.temperature, 25.0);
}

#[test]
fn legacy_payload_scored_end_to_end() {
    let (mut svc, mut sink) = make_service();
    let reading = RawReading::parse_json(
        r#"{"timestamp": 1717000000, "pollution_level": 150, "temperature": 32, "humidity": 50,
            "gas_detected": true}"#,
    )
    .unwrap();

    let report = svc.ingest(&reading, &mut sink).unwrap();

    assert_eq!(report.category.level, AqiLevel::Moderate);
    assert_eq!(report.adjusted.adjusted, 180);
    assert!(report.adjusted.harmful);
    // 0.6×0.3 + 1.0×0.3 + 0.6×0.4
    assert_eq!(report.score, 72);
    assert_eq!(report.status.grade, ScoreGrade::Good);
    assert_eq!(report.gas.label, "Detected");
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::HarmfulAir { adjusted_aqi: 180 })),
        1
    );
}

// ── Rolling history through the service ──────────────────────

#[test]
fn history_holds_last_twenty_scores() {
    let (mut svc, mut sink) = make_service();
    for i in 0..25u64 {
        let r = Reading::new(i, 50.0 + i as f64 * 10.0, 22.0, 50.0);
        svc.ingest(&r, &mut sink).unwrap();
    }
    let stamps: Vec<u64> = svc.history().iter().map(|s| s.timestamp).collect();
    assert_eq!(stamps.len(), SCORE_HISTORY_CAP);
    assert_eq!(stamps, (5..25).collect::<Vec<_>>());
    assert_eq!(sink.scores().len(), 25);
    assert_eq!(svc.ingested(), 25);
}

#[test]
fn deteriorating_air_reports_decreasing_score_trend() {
    let (mut svc, mut sink) = make_service();
    let aqis = [60.0, 60.0, 60.0, 250.0, 250.0, 250.0];
    let mut last = None;
    for (i, aqi) in aqis.into_iter().enumerate() {
        last = Some(svc.ingest(&Reading::new(i as u64, aqi, 22.0, 50.0), &mut sink).unwrap());
    }
    // Scores fall from 100 to 72.
    let report = last.unwrap();
    assert_eq!(report.trend.direction, Direction::Decreasing);
    assert!((report.trend.magnitude + 28.0).abs() < 1e-9);
}

// ── Category transitions ─────────────────────────────────────

#[test]
fn category_change_emitted_between_readings() {
    let (mut svc, mut sink) = make_service();
    svc.handle_command(AppCommand::SetScheme(Scheme::SixTier), &mut sink)
        .unwrap();
    for (i, aqi) in [40.0, 45.0, 120.0].into_iter().enumerate() {
        svc.ingest(&Reading::new(i as u64, aqi, 22.0, 50.0), &mut sink).unwrap();
    }
    let changes: Vec<&AppEvent> = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::CategoryChanged { .. }))
        .collect();
    assert_eq!(
        changes,
        vec![&AppEvent::CategoryChanged {
            from: AqiLevel::Good,
            to: AqiLevel::UnhealthyForSensitiveGroups,
        }]
    );
}

// ── Commands ─────────────────────────────────────────────────

#[test]
fn clear_history_command() {
    let (mut svc, mut sink) = make_service();
    svc.handle_command(AppCommand::Ingest(Reading::new(1, 80.0, 22.0, 50.0)), &mut sink)
        .unwrap();
    assert_eq!(svc.history().len(), 1);

    let out = svc.handle_command(AppCommand::ClearHistory, &mut sink).unwrap();
    assert!(out.is_none());
    assert!(svc.history().is_empty());
    assert_eq!(sink.events.last(), Some(&AppEvent::HistoryCleared));
}

#[test]
fn update_config_switches_to_strict() {
    let (mut svc, mut sink) = make_service();
    let strict = EngineConfig::from_json(r#"{"aqi_policy": "Strict"}"#).unwrap();
    svc.handle_command(AppCommand::UpdateConfig(strict), &mut sink)
        .unwrap();
    let bad = Reading::new(1, -1.0, 22.0, 50.0);
    assert!(svc.handle_command(AppCommand::Ingest(bad), &mut sink).is_err());
}

#[test]
fn log_sink_accepts_every_event() {
    use aqscore::adapters::log_sink::LogEventSink;
    let mut svc = ScoringService::new(EngineConfig::default());
    let mut sink = LogEventSink::new();
    for (i, aqi) in [50.0, 300.0, 50.0].into_iter().enumerate() {
        svc.ingest(&Reading::new(i as u64, aqi, 22.0, 50.0), &mut sink).unwrap();
    }
    svc.handle_command(AppCommand::ClearHistory, &mut sink).unwrap();
    assert!(svc.history().is_empty());
}
