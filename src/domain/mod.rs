//! Scoring domain: pure types and the relative Brier pipeline.
//!
//! Nothing in this module performs I/O or holds state between calls.

pub mod belief;
pub mod error;
pub mod forecast;
pub mod id;
pub mod interval;
pub mod question;
pub mod result;
pub mod scoring;

pub use belief::ForecastHistory;
pub use error::ScoringError;
pub use forecast::Forecast;
pub use id::{ParticipantId, QuestionId};
pub use interval::{DailyInterval, IntervalSchedule};
pub use question::{Question, Resolution};
pub use result::{ParticipantScore, ScoreResult};
pub use scoring::{score, ScoreBreakdown};
