// lib/src/engine/mod.rs
pub mod clock;
pub mod heuristic;
pub mod policy;
pub mod random;
pub mod regressor;

pub use clock::{hour_of, weekday_of, Clock, FixedClock, SystemClock};
pub use heuristic::{normalize_hour, normalize_weekday, HeuristicEngine};
pub use policy::{HeuristicPolicy, HeuristicVariant, PeakWindow, UniformRange};
pub use random::RandomSource;
pub use regressor::{feature_vector, LinearRegressor, ModelOutput, ModelPair, Regressor, FEATURE_COUNT};
