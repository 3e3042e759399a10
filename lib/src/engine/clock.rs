// lib/src/engine/clock.rs
use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Source of "now" for request defaults, slots and booking ids.
/// Callers read it once per request and derive hour and weekday from that
/// single instant with [`hour_of`] and [`weekday_of`].
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub fn hour_of(at: &NaiveDateTime) -> u32 {
    at.hour()
}

/// Monday = 0.
pub fn weekday_of(at: &NaiveDateTime) -> u32 {
    at.weekday().num_days_from_monday()
}

/// Server-local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant. Used to pin time in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
