//! Forecast records: one participant's probability at one instant.
//!
//! Forecasts form a revision history. A participant may submit many of them
//! on the same question; the latest one at any instant is their belief.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ScoringError;
use super::id::ParticipantId;

/// A single probability forecast for the YES outcome of a binary question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    participant_id: ParticipantId,
    probability: f64,
    submitted_at: DateTime<Utc>,
}

impl Forecast {
    /// Create a new forecast. Use [`Forecast::validate`] before scoring.
    pub fn new(
        participant_id: impl Into<ParticipantId>,
        probability: f64,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            participant_id: participant_id.into(),
            probability,
            submitted_at,
        }
    }

    /// Author of the forecast.
    #[must_use]
    pub const fn participant_id(&self) -> &ParticipantId {
        &self.participant_id
    }

    /// Probability assigned to YES.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Submission time.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Check that the participant id is non-blank and the probability lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.participant_id.is_blank() {
            return Err(ScoringError::BlankParticipant {
                submitted_at: self.submitted_at,
            });
        }
        if !self.probability.is_finite() || !(0.0..=1.0).contains(&self.probability) {
            return Err(ScoringError::ProbabilityOutOfRange {
                participant_id: self.participant_id.clone(),
                probability: self.probability,
            });
        }
        Ok(())
    }
}
