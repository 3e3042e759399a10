// lib/src/service.rs
// Request-level prediction and booking on top of the heuristic engine.

use std::sync::Arc;

use models::{
    problem_severity, round2, BookRequest, BookingRecord, CrowdCategory, PredictRequest,
    PredictResponse, PredictionResult, BOOKING_ID_PREFIX, DEFAULT_PROBLEM, MAX_CROWD_SCORE,
};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, SlotConfig};
use crate::engine::{
    feature_vector, hour_of, normalize_hour, normalize_weekday, weekday_of, Clock, HeuristicEngine,
    HeuristicPolicy, ModelOutput, ModelPair, RandomSource, SystemClock,
};
use crate::errors::PredictorResult;
use crate::scheduling::available_slots_for_hospital;

/// Share of a fresh checkup estimate quoted as the post-booking wait.
pub const BOOKING_WAIT_FACTOR: f64 = 0.7;
/// Lowest wait ever quoted on a booking.
pub const MIN_BOOKING_WAIT: u32 = 5;

const BOOKING_ID_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Where the crowd and wait figures of a prediction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateSource {
    Heuristic,
    Model,
}

pub struct PredictionService {
    engine: HeuristicEngine,
    models: Option<ModelPair>,
    clock: Arc<dyn Clock>,
    rng: RandomSource,
    slots: SlotConfig,
}

impl PredictionService {
    pub fn new(engine: HeuristicEngine, clock: Arc<dyn Clock>, rng: RandomSource) -> Self {
        PredictionService { engine, models: None, clock, rng, slots: SlotConfig::default() }
    }

    /// Wires the service from configuration: heuristic variant, seed, slot
    /// settings and whatever models exist on disk. Uses the system clock.
    pub fn from_config(config: &AppConfig) -> Self {
        let policy = HeuristicPolicy::for_variant(config.heuristic.variant);
        info!("Using {} heuristic.", policy.variant);
        PredictionService::new(
            HeuristicEngine::new(policy),
            Arc::new(SystemClock),
            RandomSource::from_seed(config.heuristic.seed),
        )
        .with_models(ModelPair::load(&config.models))
        .with_slot_config(config.slots)
    }

    pub fn with_models(mut self, models: Option<ModelPair>) -> Self {
        self.models = models;
        self
    }

    pub fn with_slot_config(mut self, slots: SlotConfig) -> Self {
        self.slots = slots;
        self
    }

    pub fn has_models(&self) -> bool {
        self.models.is_some()
    }

    /// Runs the heuristic with the shared random source.
    pub fn estimate(&self, hospital: &str, hour: i64, weekday: i64, problem: &str) -> PredictionResult {
        self.rng
            .with_rng(|rng| self.engine.estimate(hospital, hour, weekday, problem, rng))
    }

    pub fn predict(&self, req: &PredictRequest) -> PredictorResult<PredictResponse> {
        let now = self.clock.now();
        let hour = req.hour.unwrap_or_else(|| i64::from(hour_of(&now)));
        let weekday = req.weekday.unwrap_or_else(|| i64::from(weekday_of(&now)));
        let problem = req
            .problem
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PROBLEM);

        debug!(hospital = %req.hospital, hour, weekday, problem, "predict");

        let heuristic = self.estimate(&req.hospital, hour, weekday, problem);
        let (result, source) = match self.model_estimate(hour, weekday, problem) {
            Some(output) => (apply_model_output(output, heuristic), EstimateSource::Model),
            None => (heuristic, EstimateSource::Heuristic),
        };
        let crowd_category = CrowdCategory::from_score(result.crowd_score);
        debug!(
            ?source,
            crowd_score = result.crowd_score,
            category = %crowd_category,
            wait = result.wait_minutes,
            "prediction ready"
        );

        let recommended_slots = available_slots_for_hospital(&req.hospital, now, &self.slots)?;

        Ok(PredictResponse {
            hospital: req.hospital.clone(),
            crowd_score: result.crowd_score,
            crowd_category,
            wait_minutes: result.wait_minutes,
            inflow_est: result.inflow_est,
            emergency_est: result.emergency_est,
            suggestions: result.suggestions,
            recommended_slots,
        })
    }

    /// Asks both models for crowd and wait. Any failure drops back to the
    /// heuristic without surfacing an error.
    fn model_estimate(&self, hour: i64, weekday: i64, problem: &str) -> Option<ModelOutput> {
        let models = self.models.as_ref()?;
        let features = feature_vector(
            normalize_hour(hour),
            normalize_weekday(weekday),
            problem_severity(problem),
        );
        match models.predict(&features) {
            Ok(output) => Some(output),
            Err(e) => {
                warn!("Model prediction failed, falling back to heuristic: {}", e);
                None
            }
        }
    }

    /// Mock booking. Nothing is stored; the id is time based with a two digit
    /// random suffix and is not unique within a second.
    pub fn book(&self, req: &BookRequest) -> PredictorResult<BookingRecord> {
        let now = self.clock.now();
        let (suffix, token) = self
            .rng
            .with_rng(|rng| (rng.gen_range(10..=99u32), rng.gen_range(1000..=9999u32)));
        let booking_id = format!("{}{}{}", BOOKING_ID_PREFIX, now.format(BOOKING_ID_TIME_FORMAT), suffix);

        let checkup = self.estimate(
            &req.hospital,
            i64::from(hour_of(&now)),
            i64::from(weekday_of(&now)),
            DEFAULT_PROBLEM,
        );
        let estimated_wait = booking_wait(checkup.wait_minutes);

        info!(%booking_id, hospital = %req.hospital, slot = %req.slot, "booking created");

        Ok(BookingRecord {
            booking_id,
            hospital: req.hospital.clone(),
            slot: req.slot.clone(),
            token: token.to_string(),
            estimated_wait,
        })
    }
}

/// Replaces crowd and wait with model figures and derives inflow/emergency
/// from the predicted wait. Suggestions stay heuristic.
fn apply_model_output(output: ModelOutput, heuristic: PredictionResult) -> PredictionResult {
    let wait_minutes = output.wait_minutes.max(0.0) as u32;
    PredictionResult {
        crowd_score: round2(output.crowd_score.clamp(0.0, MAX_CROWD_SCORE)),
        wait_minutes,
        inflow_est: (wait_minutes / 4).max(5),
        emergency_est: wait_minutes / 20,
        suggestions: heuristic.suggestions,
    }
}

fn booking_wait(checkup_wait: u32) -> u32 {
    ((f64::from(checkup_wait) * BOOKING_WAIT_FACTOR) as u32).max(MIN_BOOKING_WAIT)
}
