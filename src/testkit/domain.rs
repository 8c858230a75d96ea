//! Builders for domain primitives used across tests.
//!
//! Every timestamp is an offset from [`t0`], so tests read in days and hours
//! rather than calendar dates.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{Forecast, ParticipantId, Question, QuestionId, Resolution};

/// The instant every test question is created at.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// `t0` plus a fractional number of days, at millisecond resolution.
pub fn day(days: f64) -> DateTime<Utc> {
    t0() + Duration::milliseconds((days * 86_400_000.0).round() as i64)
}

/// A question created at `t0` and resolved `days` later.
pub fn question(days: f64, resolution: Resolution) -> Question {
    named_question("q", days, resolution)
}

/// Like [`question`], with an explicit ID.
pub fn named_question(id: &str, days: f64, resolution: Resolution) -> Question {
    Question::new(QuestionId::new(id), t0(), day(days), resolution)
}

/// A forecast by `who` submitted `days` after `t0`.
pub fn forecast(who: &str, probability: f64, days: f64) -> Forecast {
    Forecast::new(who, probability, day(days))
}

/// Shorthand for a participant id.
pub fn participant(id: &str) -> ParticipantId {
    ParticipantId::new(id)
}

/// Assert two scores agree within `tolerance`.
#[track_caller]
pub fn assert_near(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
