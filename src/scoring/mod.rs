//! Scoring engine — pure classification and scoring functions.
//!
//! Every function here is deterministic and side-effect free: same input,
//! same output, no I/O, no shared state.  Stateful pieces (the rolling
//! score window) live in [`crate::history`].

pub mod adjusted;
pub mod category;
pub mod composite;
pub mod trend;

pub use adjusted::{AdjustedAqi, HARMFUL_ADJUSTED_AQI, adjusted_aqi, assess, is_harmful};
pub use category::{AqiLevel, Category, Scheme, classify, classify_aqi, gas_status};
pub use composite::{
    ScoreFactors, ScoreGrade, ScoreStatus, composite_score, factors, score_status,
};
pub use trend::{
    DeltaStatus, Direction, Intensity, Metric, Trend, TrendStatus, delta_status, trend, trend_status,
    try_trend,
};
