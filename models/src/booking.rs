// models/src/booking.rs
use serde::{Deserialize, Serialize};

/// Prefix every booking id starts with.
pub const BOOKING_ID_PREFIX: &str = "BK";

/// A mock booking confirmation. Built per request and never stored, so two
/// bookings made in the same second can share an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: String,
    pub hospital: String,
    pub slot: String,
    pub token: String,
    pub estimated_wait: u32,
}
