// models/src/lib.rs
// Shared value types for the hospital traffic predictor: lookup tables,
// prediction results, bookings and the JSON request/response shapes.

pub mod api;
pub mod booking;
pub mod errors;
pub mod medical;
pub mod prediction;

pub use api::{HealthResponse, PredictRequest, PredictResponse, BookRequest, UiError};
pub use booking::{BookingRecord, BOOKING_ID_PREFIX};
pub use errors::ValidationError;
pub use medical::hospital::{hospital_profile, HospitalProfile, DEFAULT_HOSPITAL_PROFILE, HOSPITAL_PROFILES};
pub use medical::problem::{problem_severity, DEFAULT_PROBLEM, DEFAULT_SEVERITY, PROBLEM_SEVERITY};
pub use prediction::{round2, CrowdCategory, PredictionResult, Suggestion, MAX_CROWD_SCORE};
