//! Brierly - relative Brier scoring for resolved forecasting questions.
//!
//! Given a resolved yes/no question and the time-stamped probability
//! forecasts of its participants, the scorer reconstructs each participant's
//! belief day by day, scores it against the outcome, normalises it against
//! the group median and ranks participants by the result.
//!
//! # Modules
//!
//! - [`domain`] - Pure scoring pipeline: intervals, beliefs, relative scores
//! - [`port`] - Traits for the forecast store, score store and notifiers
//! - [`adapter`] - In-memory and JSON-file stores, and the CLI
//! - [`application`] - Resolution service and reference fixtures
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use brierly::domain::{score, Forecast, Question, QuestionId, Resolution};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let question = Question::new(QuestionId::new("q"), t0, t0 + Duration::days(7), Resolution::Yes);
//! let forecasts = vec![
//!     Forecast::new("A", 0.9, t0),
//!     Forecast::new("A", 0.95, t0 + Duration::days(3)),
//! ];
//!
//! let result = score(&question, &forecasts).unwrap();
//! assert!((result.as_slice()[0].relative_score - 0.0114).abs() < 1e-4);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
