// lib/src/engine/heuristic.rs
// Closed-form crowd/wait estimate over the hospital and problem tables.

use models::{
    hospital_profile, problem_severity, round2, PredictionResult, Suggestion, HOSPITAL_PROFILES,
    MAX_CROWD_SCORE,
};
use rand::Rng;
use tracing::trace;

use crate::engine::policy::{HeuristicPolicy, UniformRange};

pub fn normalize_hour(hour: i64) -> u32 {
    hour.rem_euclid(24) as u32
}

pub fn normalize_weekday(weekday: i64) -> u32 {
    weekday.rem_euclid(7) as u32
}

/// Stateless estimator. All randomness comes from the generator passed to
/// [`HeuristicEngine::estimate`], so a seeded generator makes it reproducible.
#[derive(Debug, Clone, Default)]
pub struct HeuristicEngine {
    policy: HeuristicPolicy,
}

impl HeuristicEngine {
    pub fn new(policy: HeuristicPolicy) -> Self {
        HeuristicEngine { policy }
    }

    pub fn policy(&self) -> &HeuristicPolicy {
        &self.policy
    }

    /// Estimates crowding at `hospital`. Out-of-range hours and weekdays wrap,
    /// unknown hospitals and problems use the table defaults. Never fails.
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        hospital: &str,
        hour: i64,
        weekday: i64,
        problem: &str,
        rng: &mut R,
    ) -> PredictionResult {
        let p = &self.policy;
        let hour = normalize_hour(hour);
        let weekday = normalize_weekday(weekday);
        let severity = f64::from(problem_severity(problem));
        let capacity = f64::from(hospital_profile(hospital).base_capacity.max(1));

        let t_mult = p.time_multiplier(hour);
        let w_mult = p.weekday_multiplier(weekday);

        let inflow = (capacity * draw(rng, p.inflow_range) * t_mult * w_mult) as u32;
        let inflow = inflow.max(p.inflow_floor).max(1);

        let emergency_rate = p.emergency_base + p.emergency_per_severity * severity;
        let emergency = (f64::from(inflow) * emergency_rate * draw(rng, p.emergency_jitter)) as u32;
        let emergency = emergency.max(p.emergency_floor);

        let load_ratio = f64::from(inflow) / capacity;
        let emergency_share = f64::from(emergency) / f64::from(inflow);

        let raw_crowd = load_ratio * p.crowd.load
            + severity * p.crowd.severity
            + emergency_share * p.crowd.emergency_share;
        let crowd_score = round2(raw_crowd.clamp(0.0, MAX_CROWD_SCORE));

        let raw_wait = p.wait.offset
            + load_ratio * p.wait.load
            + severity * p.wait.severity
            + f64::from(emergency) * p.wait.emergency;
        let wait_minutes = raw_wait.max(0.0) as u32;

        trace!(
            hospital,
            hour,
            weekday,
            inflow,
            emergency,
            load_ratio,
            crowd_score,
            wait_minutes,
            "heuristic estimate"
        );

        PredictionResult {
            crowd_score,
            wait_minutes,
            inflow_est: inflow,
            emergency_est: emergency,
            suggestions: self.suggest_alternatives(hospital, load_ratio, rng),
        }
    }

    /// Simulates every other known hospital with fresh draws and returns the
    /// shortest waits, ascending.
    pub fn suggest_alternatives<R: Rng + ?Sized>(
        &self,
        hospital: &str,
        load_ratio: f64,
        rng: &mut R,
    ) -> Vec<Suggestion> {
        let p = &self.policy;
        let mut suggestions: Vec<Suggestion> = Vec::new();

        for (name, profile) in HOSPITAL_PROFILES.iter() {
            if *name == hospital {
                continue;
            }
            let capacity = f64::from(profile.base_capacity.max(1));
            let inflow = ((capacity * draw(rng, p.suggestion_inflow_range)) as u32).max(p.inflow_floor);
            let ratio = f64::from(inflow) / capacity;
            if p.suggestions_only_less_loaded && ratio >= load_ratio {
                continue;
            }
            let est_wait = (p.suggestion_wait_offset + ratio * p.suggestion_wait_load).max(0.0) as u32;
            suggestions.push(Suggestion { hospital: (*name).to_string(), est_wait });
        }

        // stable, so equal waits keep table order
        suggestions.sort_by_key(|s| s.est_wait);
        suggestions.truncate(p.max_suggestions);
        suggestions
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, range: UniformRange) -> f64 {
    range.scale(rng.gen::<f64>())
}
