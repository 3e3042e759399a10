// lib/src/scheduling.rs
// Demo appointment slots. There is no schedule behind these; they are evenly
// spaced times starting a little after now.

use chrono::{Duration, NaiveDateTime};
use tracing::trace;

use crate::config::SlotConfig;
use crate::errors::{PredictorError, PredictorResult};

/// Sortable minute-resolution slot format.
pub const SLOT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `count` slot times, `spacing_minutes` apart, the first `after_minutes` after `now`.
pub fn slot_times(
    now: NaiveDateTime,
    after_minutes: i64,
    count: usize,
    spacing_minutes: i64,
) -> PredictorResult<Vec<NaiveDateTime>> {
    let out_of_range = || PredictorError::Internal("slot time out of range".to_string());
    let first = now
        .checked_add_signed(Duration::try_minutes(after_minutes).ok_or_else(out_of_range)?)
        .ok_or_else(out_of_range)?;

    (0..count)
        .map(|i| {
            let offset = i64::try_from(i)
                .ok()
                .and_then(|i| i.checked_mul(spacing_minutes))
                .and_then(Duration::try_minutes)
                .ok_or_else(out_of_range)?;
            first.checked_add_signed(offset).ok_or_else(out_of_range)
        })
        .collect()
}

/// Formatted recommended slots for `hospital`. Every hospital gets the same
/// slots; the name is only used for tracing.
pub fn available_slots_for_hospital(
    hospital: &str,
    now: NaiveDateTime,
    slots: &SlotConfig,
) -> PredictorResult<Vec<String>> {
    let times = slot_times(now, slots.after_minutes, slots.count, slots.spacing_minutes)?;
    trace!(hospital, count = times.len(), "generated slots");
    Ok(times.iter().map(|t| t.format(SLOT_FORMAT).to_string()).collect())
}
