//! Question metadata consumed by the scorer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ScoringError;
use super::id::QuestionId;

/// How a question was resolved.
///
/// `Ambiguous` exists because the surrounding application stores it, but the
/// scorer only accepts binary resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Resolution {
    /// The event happened.
    Yes,
    /// The event did not happen.
    No,
    /// The question could not be resolved either way.
    Ambiguous,
}

impl Resolution {
    /// Numeric truth value of a binary resolution: 1.0 for YES, 0.0 for NO.
    #[must_use]
    pub const fn true_value(self) -> Option<f64> {
        match self {
            Self::Yes => Some(1.0),
            Self::No => Some(0.0),
            Self::Ambiguous => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::Ambiguous => "AMBIGUOUS",
        };
        f.write_str(label)
    }
}

/// A resolved binary question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    created_at: DateTime<Utc>,
    resolved_at: DateTime<Utc>,
    resolution: Resolution,
}

impl Question {
    /// Create a question. Use [`Question::validate`] before scoring.
    #[must_use]
    pub const fn new(
        id: QuestionId,
        created_at: DateTime<Utc>,
        resolved_at: DateTime<Utc>,
        resolution: Resolution,
    ) -> Self {
        Self {
            id,
            created_at,
            resolved_at,
            resolution,
        }
    }

    /// Question identifier.
    #[must_use]
    pub const fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Creation time; the first scoring interval starts here.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Resolution time; the last scoring interval ends here.
    #[must_use]
    pub const fn resolved_at(&self) -> DateTime<Utc> {
        self.resolved_at
    }

    /// The recorded resolution.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Validate the question and return the truth value of its resolution.
    pub fn validate(&self) -> Result<f64, ScoringError> {
        if self.resolved_at < self.created_at {
            return Err(ScoringError::ResolvedBeforeCreated {
                created_at: self.created_at,
                resolved_at: self.resolved_at,
            });
        }
        self.resolution
            .true_value()
            .ok_or_else(|| ScoringError::NonBinaryResolution {
                resolution: self.resolution.to_string(),
            })
    }
}
