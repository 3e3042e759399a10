// models/src/api.rs
// JSON bodies exchanged with the frontend.
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::prediction::{CrowdCategory, Suggestion};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    pub hospital: String,
    #[serde(default, deserialize_with = "whole_number")]
    pub hour: Option<i64>,
    /// 0 = Monday.
    #[serde(default, deserialize_with = "whole_number")]
    pub weekday: Option<i64>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub want_booking: Option<bool>,
}

/// Accepts `9` and `9.0` alike; fractional values are rejected.
fn whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Option::<Number>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Number::Int(n)) => Ok(Some(n)),
        Some(Number::Float(f))
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 =>
        {
            Ok(Some(f as i64))
        }
        Some(Number::Float(f)) => {
            Err(de::Error::custom(format!("expected a whole number, got {f}")))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub hospital: String,
    pub crowd_score: f64,
    pub crowd_category: CrowdCategory,
    pub wait_minutes: u32,
    pub inflow_est: u32,
    pub emergency_est: u32,
    pub suggestions: Vec<Suggestion>,
    pub recommended_slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRequest {
    pub hospital: String,
    pub slot: String,
    pub name: String,
    pub phone: String,
    pub fee_paid: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        HealthResponse { status: "ok".to_string(), message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiError {
    pub error: String,
}
