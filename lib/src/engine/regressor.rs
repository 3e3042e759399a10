// lib/src/engine/regressor.rs
// Optional pre-trained models that replace the heuristic's crowd and wait figures.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ModelConfig;
use crate::errors::{PredictorError, PredictorResult};

/// Number of features every regressor is called with.
pub const FEATURE_COUNT: usize = 4;

/// `[hour, weekday, severity, 1.0]`, with hour and weekday already normalised.
pub fn feature_vector(hour: u32, weekday: u32, severity: u8) -> [f64; FEATURE_COUNT] {
    [f64::from(hour), f64::from(weekday), f64::from(severity), 1.0]
}

/// Given a numeric feature vector, return a scalar or fail.
pub trait Regressor: Send + Sync + fmt::Debug {
    fn predict(&self, features: &[f64]) -> PredictorResult<f64>;
}

/// `intercept + sum(coefficients[i] * features[i])`, stored as JSON:
/// `{"intercept": 1.5, "coefficients": [0.1, 0.0, 1.2, 0.0]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    #[serde(default)]
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearRegressor {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        LinearRegressor { intercept, coefficients }
    }

    pub fn from_json_file(path: &Path) -> PredictorResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| PredictorError::ModelIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| PredictorError::ModelFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, features: &[f64]) -> PredictorResult<f64> {
        if features.len() != self.coefficients.len() {
            return Err(PredictorError::FeatureShape {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }
        let value = self
            .coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (c, x)| acc + c * x);
        if !value.is_finite() {
            return Err(PredictorError::NonFiniteOutput(value));
        }
        Ok(value)
    }
}

/// Crowd and wait models. Only used when both are present.
#[derive(Debug, Clone)]
pub struct ModelPair {
    crowd: Arc<dyn Regressor>,
    wait: Arc<dyn Regressor>,
}

/// Raw model outputs before clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOutput {
    pub crowd_score: f64,
    pub wait_minutes: f64,
}

impl ModelPair {
    pub fn new(crowd: Arc<dyn Regressor>, wait: Arc<dyn Regressor>) -> Self {
        ModelPair { crowd, wait }
    }

    /// Loads both models from the configured paths. A missing file is normal
    /// and logged at info; an unreadable one is logged at warn. Either way the
    /// service runs heuristic-only.
    pub fn load(config: &ModelConfig) -> Option<Self> {
        let crowd = load_optional("crowd", &config.crowd_path)?;
        let wait = load_optional("wait", &config.wait_path)?;
        info!("Crowd and wait models loaded; model predictions enabled.");
        Some(ModelPair::new(Arc::new(crowd), Arc::new(wait)))
    }

    pub fn predict(&self, features: &[f64]) -> PredictorResult<ModelOutput> {
        let crowd_score = self.crowd.predict(features)?;
        let wait_minutes = self.wait.predict(features)?;
        debug!(crowd_score, wait_minutes, "model prediction");
        Ok(ModelOutput { crowd_score, wait_minutes })
    }
}

fn load_optional(kind: &str, path: &Path) -> Option<LinearRegressor> {
    if !path.exists() {
        info!("No {} model at {:?}; using heuristic.", kind, path);
        return None;
    }
    match LinearRegressor::from_json_file(path) {
        Ok(model) => {
            info!("{} model loaded from {:?}.", kind, path);
            Some(model)
        }
        Err(e) => {
            warn!("Failed to load {} model: {}", kind, e);
            None
        }
    }
}
