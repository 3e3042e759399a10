// lib/src/engine/policy.rs
// Constant sets for the crowd/wait heuristic.
//
// Two sets exist and they produce materially different numbers for the same
// inputs. `standard` is the default; `legacy` reproduces the earlier service.
// They are selected as a whole and never mixed.

use std::fmt;
use std::str::FromStr;

use models::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicVariant {
    #[default]
    Standard,
    Legacy,
}

impl FromStr for HeuristicVariant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(HeuristicVariant::Standard),
            "legacy" => Ok(HeuristicVariant::Legacy),
            _ => Err(ValidationError::UnknownHeuristicVariant(s.to_string())),
        }
    }
}

impl fmt::Display for HeuristicVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicVariant::Standard => write!(f, "standard"),
            HeuristicVariant::Legacy => write!(f, "legacy"),
        }
    }
}

/// Inclusive hour range with its inflow multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub multiplier: f64,
}

impl PeakWindow {
    pub const fn new(start_hour: u32, end_hour: u32, multiplier: f64) -> Self {
        PeakWindow { start_hour, end_hour, multiplier }
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..=self.end_hour).contains(&hour)
    }
}

/// Half-open uniform range `[low, high)`. A range with `low == high` is a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRange {
    pub low: f64,
    pub high: f64,
}

impl UniformRange {
    pub const fn new(low: f64, high: f64) -> Self {
        UniformRange { low, high }
    }

    /// Maps a unit draw in `[0, 1)` into the range.
    pub fn scale(&self, unit: f64) -> f64 {
        self.low + unit * (self.high - self.low)
    }
}

/// crowd = load_ratio * load + severity * severity + emergency_share * emergency_share
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrowdWeights {
    pub load: f64,
    pub severity: f64,
    pub emergency_share: f64,
}

/// wait = offset + load_ratio * load + severity * severity + emergency * emergency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitWeights {
    pub offset: f64,
    pub load: f64,
    pub severity: f64,
    pub emergency: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicPolicy {
    pub variant: HeuristicVariant,
    pub peak_windows: Vec<PeakWindow>,
    pub off_peak_multiplier: f64,
    pub weekend_multiplier: f64,
    pub inflow_range: UniformRange,
    pub inflow_floor: u32,
    pub emergency_base: f64,
    pub emergency_per_severity: f64,
    pub emergency_jitter: UniformRange,
    pub emergency_floor: u32,
    pub crowd: CrowdWeights,
    pub wait: WaitWeights,
    pub suggestion_inflow_range: UniformRange,
    pub suggestion_wait_offset: f64,
    pub suggestion_wait_load: f64,
    /// Keep only alternatives whose simulated load ratio is below the queried hospital's.
    pub suggestions_only_less_loaded: bool,
    pub max_suggestions: usize,
}

impl HeuristicPolicy {
    pub fn standard() -> Self {
        HeuristicPolicy {
            variant: HeuristicVariant::Standard,
            peak_windows: vec![
                PeakWindow::new(7, 10, 1.6),
                PeakWindow::new(17, 20, 1.8),
                PeakWindow::new(11, 16, 1.2),
            ],
            off_peak_multiplier: 0.9,
            weekend_multiplier: 0.85,
            inflow_range: UniformRange::new(0.3, 0.9),
            inflow_floor: 5,
            emergency_base: 0.08,
            emergency_per_severity: 0.02,
            emergency_jitter: UniformRange::new(0.8, 1.6),
            emergency_floor: 1,
            crowd: CrowdWeights { load: 8.0, severity: 1.6, emergency_share: 4.0 },
            wait: WaitWeights { offset: 8.0, load: 75.0, severity: 10.0, emergency: 3.0 },
            suggestion_inflow_range: UniformRange::new(0.2, 0.7),
            suggestion_wait_offset: 13.0,
            suggestion_wait_load: 75.0,
            suggestions_only_less_loaded: false,
            max_suggestions: 3,
        }
    }

    pub fn legacy() -> Self {
        HeuristicPolicy {
            variant: HeuristicVariant::Legacy,
            peak_windows: vec![PeakWindow::new(8, 11, 1.4), PeakWindow::new(17, 20, 1.6)],
            off_peak_multiplier: 1.0,
            weekend_multiplier: 0.8,
            // 0.2 * U[0.8, 1.6)
            inflow_range: UniformRange::new(0.16, 0.32),
            inflow_floor: 5,
            // 0.08 * (1 + 0.2 * severity)
            emergency_base: 0.08,
            emergency_per_severity: 0.016,
            emergency_jitter: UniformRange::new(1.0, 1.0),
            emergency_floor: 0,
            crowd: CrowdWeights { load: 6.0, severity: 0.8, emergency_share: 0.0 },
            wait: WaitWeights { offset: 10.0, load: 60.0, severity: 8.0, emergency: 3.0 },
            // 0.18 * U[0.9, 1.5)
            suggestion_inflow_range: UniformRange::new(0.162, 0.27),
            suggestion_wait_offset: 10.0,
            suggestion_wait_load: 60.0,
            suggestions_only_less_loaded: true,
            max_suggestions: 3,
        }
    }

    pub fn for_variant(variant: HeuristicVariant) -> Self {
        match variant {
            HeuristicVariant::Standard => Self::standard(),
            HeuristicVariant::Legacy => Self::legacy(),
        }
    }

    /// First matching peak window wins; otherwise the off-peak multiplier.
    pub fn time_multiplier(&self, hour: u32) -> f64 {
        self.peak_windows
            .iter()
            .find(|w| w.contains(hour))
            .map(|w| w.multiplier)
            .unwrap_or(self.off_peak_multiplier)
    }

    /// Weekday index follows Monday = 0, so 5 and 6 are the weekend.
    pub fn weekday_multiplier(&self, weekday: u32) -> f64 {
        if weekday >= 5 {
            self.weekend_multiplier
        } else {
            1.0
        }
    }
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_time_windows() {
        let p = HeuristicPolicy::standard();
        assert_eq!(p.time_multiplier(6), 0.9);
        assert_eq!(p.time_multiplier(7), 1.6);
        assert_eq!(p.time_multiplier(10), 1.6);
        assert_eq!(p.time_multiplier(11), 1.2);
        assert_eq!(p.time_multiplier(16), 1.2);
        assert_eq!(p.time_multiplier(17), 1.8);
        assert_eq!(p.time_multiplier(20), 1.8);
        assert_eq!(p.time_multiplier(21), 0.9);
        assert_eq!(p.time_multiplier(0), 0.9);
    }

    #[test]
    fn legacy_time_windows() {
        let p = HeuristicPolicy::legacy();
        assert_eq!(p.time_multiplier(7), 1.0);
        assert_eq!(p.time_multiplier(8), 1.4);
        assert_eq!(p.time_multiplier(11), 1.4);
        assert_eq!(p.time_multiplier(14), 1.0);
        assert_eq!(p.time_multiplier(18), 1.6);
    }

    #[test]
    fn weekend_is_discounted() {
        let p = HeuristicPolicy::standard();
        assert_eq!(p.weekday_multiplier(0), 1.0);
        assert_eq!(p.weekday_multiplier(4), 1.0);
        assert_eq!(p.weekday_multiplier(5), 0.85);
        assert_eq!(p.weekday_multiplier(6), 0.85);
        assert_eq!(HeuristicPolicy::legacy().weekday_multiplier(6), 0.8);
    }

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!("Legacy".parse::<HeuristicVariant>().unwrap(), HeuristicVariant::Legacy);
        assert_eq!("standard".parse::<HeuristicVariant>().unwrap(), HeuristicVariant::Standard);
        assert_eq!(
            "v3".parse::<HeuristicVariant>(),
            Err(ValidationError::UnknownHeuristicVariant("v3".to_string()))
        );
        assert_eq!(HeuristicPolicy::for_variant(HeuristicVariant::Legacy).variant, HeuristicVariant::Legacy);
    }
}
