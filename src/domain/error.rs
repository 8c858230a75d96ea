//! Validation errors raised by the scoring core.
//!
//! Every variant here is an invalid-input condition: the scorer refuses to
//! produce a number rather than return a silently wrong one.
//!
//! # Examples
//!
//! ```
//! use brierly::domain::error::ScoringError;
//! use brierly::domain::question::{Question, Resolution};
//! use brierly::domain::id::QuestionId;
//! use brierly::domain::scoring::score;
//! use chrono::{TimeZone, Utc};
//!
//! let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let resolved = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
//! let question = Question::new(QuestionId::new("q"), created, resolved, Resolution::Yes);
//!
//! let result = score(&question, &[]);
//! assert!(matches!(result, Err(ScoringError::NoForecasts)));
//! ```

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::id::ParticipantId;

/// Errors that occur when scoring inputs violate domain invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// The question resolves before it was created.
    #[error("resolved_at {resolved_at} is before created_at {created_at}")]
    ResolvedBeforeCreated {
        /// Question creation time.
        created_at: DateTime<Utc>,
        /// Question resolution time.
        resolved_at: DateTime<Utc>,
    },

    /// Only YES/NO resolutions can be scored.
    #[error("question resolution is not binary: {resolution}")]
    NonBinaryResolution {
        /// The resolution that was provided.
        resolution: String,
    },

    /// The forecast list is empty.
    #[error("forecasts cannot be empty")]
    NoForecasts,

    /// Forecasts exist, but none was submitted before resolution.
    #[error("no forecast was submitted before resolution")]
    NoForecastsBeforeResolution,

    /// A forecast probability lies outside `[0, 1]` or is not finite.
    #[error("probability for participant {participant_id} must be within [0, 1], got {probability}")]
    ProbabilityOutOfRange {
        /// Author of the offending forecast.
        participant_id: ParticipantId,
        /// The invalid probability.
        probability: f64,
    },

    /// A forecast has an empty participant identifier.
    #[error("forecast at {submitted_at} has a blank participant id")]
    BlankParticipant {
        /// Submission time of the offending forecast.
        submitted_at: DateTime<Utc>,
    },
}
