//! Wire format of the prediction service response.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The ring gauge keeps a sliver visible even for a zero score.
const GAUGE_MIN: f64 = 2.0;
const GAUGE_MAX: f64 = 100.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionResponse {
    pub failure_in_30_days: bool,
    pub failure_type: String,
    pub risk_score: f64,
    pub priority: Priority,
    pub recommended_action: String,
}

impl PredictionResponse {
    /// Badge text derived from the 30-day failure flag.
    pub fn risk_badge(&self) -> &'static str {
        if self.failure_in_30_days {
            "High Risk"
        } else {
            "Low Risk"
        }
    }

    /// Risk score clamped into the gauge range and rounded for display.
    pub fn gauge_value(&self) -> u8 {
        self.risk_score.clamp(GAUGE_MIN, GAUGE_MAX).round() as u8
    }
}

/// The service has answered with both a label and a numeric level
/// over its lifetime, accept either shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Priority {
    Label(String),
    Level(i32),
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::Level(level) => write!(f, "{}", level),
        }
    }
}
