// models/src/prediction.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound of the crowd score scale.
pub const MAX_CROWD_SCORE: f64 = 10.0;

/// An alternative hospital and its simulated wait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub hospital: String,
    pub est_wait: u32,
}

/// Output of a single estimate. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub crowd_score: f64,
    pub wait_minutes: u32,
    pub inflow_est: u32,
    pub emergency_est: u32,
    pub suggestions: Vec<Suggestion>,
}

/// Three-level bucketing of the crowd score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrowdCategory {
    Low,
    Moderate,
    High,
}

impl CrowdCategory {
    /// Boundaries belong to the higher bucket: 3.5 is Moderate, 6.5 is High.
    pub fn from_score(score: f64) -> Self {
        if score < 3.5 {
            CrowdCategory::Low
        } else if score < 6.5 {
            CrowdCategory::Moderate
        } else {
            CrowdCategory::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdCategory::Low => "Low",
            CrowdCategory::Moderate => "Moderate",
            CrowdCategory::High => "High",
        }
    }
}

impl fmt::Display for CrowdCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rounds to two decimal places, the precision crowd scores are reported at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
