// lib/src/lib.rs
// Crowd and wait estimation for the hospital traffic predictor.

pub mod config;
pub mod engine;
pub mod errors;
pub mod scheduling;
pub mod service;

pub use crate::config::{load_app_config, AppConfig};
pub use crate::engine::{Clock, HeuristicEngine, HeuristicPolicy, HeuristicVariant, ModelPair, RandomSource};
pub use crate::errors::{PredictorError, PredictorResult};
pub use crate::scheduling::{available_slots_for_hospital, SLOT_FORMAT};
pub use crate::service::{EstimateSource, PredictionService};
