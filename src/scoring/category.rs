//! AQI classification.
//!
//! Two tier tables coexist because different dashboard surfaces were built
//! against different thresholds:
//!
//! | Scheme      | Tiers                                                        |
//! |-------------|--------------------------------------------------------------|
//! | `SixTier`   | Good ≤50, Moderate ≤100, USG ≤150, Unhealthy ≤200, Very Unhealthy ≤300, Hazardous |
//! | `ThreeTier` | Safe ≤110, Moderate ≤200, Bad                                |
//!
//! Each upper bound is inclusive.  The caller picks the scheme explicitly.

use serde::{Deserialize, Serialize};

use crate::config::AqiPolicy;
use crate::error::{Error, Result};

/// Named classification scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    /// EPA-style six tiers (map markers, legend, enhanced status).
    SixTier,
    /// Simplified three tiers (live cards, daily status).
    ThreeTier,
}

/// Every tier of both schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Safe,
    Bad,
}

/// A classified AQI value with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub level: AqiLevel,
    pub label: &'static str,
    /// 0 for the best tier, increasing with severity.
    pub severity_rank: u8,
    pub color: &'static str,
    pub bg_color: &'static str,
    pub description: &'static str,
    pub health_effects: &'static str,
}

struct Tier {
    /// Inclusive upper bound; `None` for the open-ended top tier.
    upper: Option<f64>,
    category: Category,
}

static SIX_TIER: [Tier; 6] = [
    Tier {
        upper: Some(50.0),
        category: Category {
            level: AqiLevel::Good,
            label: "Good",
            severity_rank: 0,
            color: "#00E400",
            bg_color: "#E8F5E8",
            description: "Air quality is satisfactory, and air pollution poses little or no risk.",
            health_effects: "None for the general population.",
        },
    },
    Tier {
        upper: Some(100.0),
        category: Category {
            level: AqiLevel::Moderate,
            label: "Moderate",
            severity_rank: 1,
            color: "#FFFF00",
            bg_color: "#FFFFF0",
            description: "Air quality is acceptable; however, some pollutants may be a concern for a small number of people.",
            health_effects: "Unusually sensitive people should consider reducing prolonged or heavy exertion.",
        },
    },
    Tier {
        upper: Some(150.0),
        category: Category {
            level: AqiLevel::UnhealthyForSensitiveGroups,
            label: "Unhealthy for Sensitive Groups",
            severity_rank: 2,
            color: "#FF7E00",
            bg_color: "#FFF4E6",
            description: "Members of sensitive groups may experience health effects.",
            health_effects: "Children, elderly, and people with heart or lung disease should reduce prolonged or heavy exertion.",
        },
    },
    Tier {
        upper: Some(200.0),
        category: Category {
            level: AqiLevel::Unhealthy,
            label: "Unhealthy",
            severity_rank: 3,
            color: "#FF0000",
            bg_color: "#FFE6E6",
            description: "Everyone may begin to experience health effects.",
            health_effects: "Children, elderly, and people with heart or lung disease should avoid prolonged or heavy exertion.",
        },
    },
    Tier {
        upper: Some(300.0),
        category: Category {
            level: AqiLevel::VeryUnhealthy,
            label: "Very Unhealthy",
            severity_rank: 4,
            color: "#8F3F97",
            bg_color: "#F0E6F0",
            description: "Health warnings of emergency conditions.",
            health_effects: "Everyone should avoid all outdoor exertion.",
        },
    },
    Tier {
        upper: None,
        category: Category {
            level: AqiLevel::Hazardous,
            label: "Hazardous",
            severity_rank: 5,
            color: "#7E0023",
            bg_color: "#F0E6E6",
            description: "Health alert: everyone may experience more serious health effects.",
            health_effects: "Everyone should avoid all outdoor activities.",
        },
    },
];

static THREE_TIER: [Tier; 3] = [
    Tier {
        upper: Some(110.0),
        category: Category {
            level: AqiLevel::Safe,
            label: "Safe",
            severity_rank: 0,
            color: "#00E400",
            bg_color: "#E8F5E8",
            description: "Air quality is within the safe range.",
            health_effects: "None for the general population.",
        },
    },
    Tier {
        upper: Some(200.0),
        category: Category {
            level: AqiLevel::Moderate,
            label: "Moderate",
            severity_rank: 1,
            color: "#FFFF00",
            bg_color: "#FFFFF0",
            description: "Air quality is degraded; sensitive people may notice effects.",
            health_effects: "Sensitive people should limit prolonged exertion.",
        },
    },
    Tier {
        upper: None,
        category: Category {
            level: AqiLevel::Bad,
            label: "Bad",
            severity_rank: 2,
            color: "#FF0000",
            bg_color: "#FFE6E6",
            description: "Air quality is bad.",
            health_effects: "Everyone should reduce outdoor activity.",
        },
    },
];

impl Scheme {
    fn tiers(self) -> &'static [Tier] {
        match self {
            Self::SixTier => &SIX_TIER,
            Self::ThreeTier => &THREE_TIER,
        }
    }

    /// Number of tiers in this scheme.
    pub fn tier_count(self) -> usize {
        self.tiers().len()
    }

    /// Categories from best to worst.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        self.tiers().iter().map(|t| t.category)
    }
}

/// Apply the AQI input policy: clamp bad input to 0, or reject it.
pub fn sanitize_aqi(aqi: f64, policy: AqiPolicy) -> Result<f64> {
    if aqi >= 0.0 {
        return Ok(aqi);
    }
    // Negative or NaN.
    match policy {
        AqiPolicy::Clamp => Ok(0.0),
        AqiPolicy::Strict => Err(Error::InvalidValue("aqi")),
    }
}

/// Classify `aqi` under `scheme`.
pub fn classify_aqi(aqi: f64, scheme: Scheme, policy: AqiPolicy) -> Result<Category> {
    let aqi = sanitize_aqi(aqi, policy)?;
    Ok(lookup(aqi, scheme))
}

/// Classify with the lenient clamp policy; total over every `f64`.
pub fn classify(aqi: f64, scheme: Scheme) -> Category {
    let aqi = if aqi >= 0.0 { aqi } else { 0.0 };
    lookup(aqi, scheme)
}

fn lookup(aqi: f64, scheme: Scheme) -> Category {
    let tiers = scheme.tiers();
    tiers
        .iter()
        .find(|t| t.upper.is_none_or(|upper| aqi <= upper))
        .map_or(tiers[tiers.len() - 1].category, |t| t.category)
}

// ---------------------------------------------------------------------------
// Gas detector status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GasStatus {
    pub detected: bool,
    pub label: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
}

pub fn gas_status(detected: bool) -> GasStatus {
    if detected {
        GasStatus {
            detected,
            label: "Detected",
            color: "#FF0000",
            bg_color: "#FFE6E6",
        }
    } else {
        GasStatus {
            detected,
            label: "Safe",
            color: "#00E400",
            bg_color: "#E8F5E8",
        }
    }
}
