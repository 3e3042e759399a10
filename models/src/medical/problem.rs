// models/src/medical/problem.rs
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Problem assumed when a request does not name one.
pub const DEFAULT_PROBLEM: &str = "general_checkup";

/// Severity assigned to problem categories missing from the table.
pub const DEFAULT_SEVERITY: u8 = 1;

/// Presenting problem category -> severity in 0..=4.
pub static PROBLEM_SEVERITY: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        ("fever", 1),
        ("cough_cold", 1),
        ("stomach_pain", 2),
        ("fracture", 3),
        ("chest_pain", 4),
        ("accident", 4),
        ("pregnancy", 2),
        ("child_illness", 2),
        ("general_checkup", 0),
        ("others", 1),
    ])
});

pub fn problem_severity(problem: &str) -> u8 {
    PROBLEM_SEVERITY.get(problem).copied().unwrap_or(DEFAULT_SEVERITY)
}
