//! Scoring output types.

use serde::{Deserialize, Serialize};

use super::id::ParticipantId;

/// Final score of one participant on one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantScore {
    /// Scored participant.
    pub participant_id: ParticipantId,
    /// Time-weighted Brier score, in `[0, 2]`.
    pub absolute_score: f64,
    /// Time-weighted Brier score relative to the per-day group median.
    pub relative_score: f64,
    /// Dense rank, 1 for the lowest relative score.
    pub rank: usize,
}

/// Scores for every participant on a question, ordered by rank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    scores: Vec<ParticipantScore>,
}

impl ScoreResult {
    /// Build a result from scores already sorted by rank.
    #[must_use]
    pub fn from_ranked(scores: Vec<ParticipantScore>) -> Self {
        debug_assert!(scores.iter().enumerate().all(|(i, s)| s.rank == i + 1));
        Self { scores }
    }

    /// Score for a participant, if they were scored.
    #[must_use]
    pub fn get(&self, participant_id: &ParticipantId) -> Option<&ParticipantScore> {
        self.scores
            .iter()
            .find(|s| &s.participant_id == participant_id)
    }

    /// Scores in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &ParticipantScore> {
        self.scores.iter()
    }

    /// Scores in rank order, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ParticipantScore] {
        &self.scores
    }

    /// Number of scored participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when nobody was scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The best-ranked participant.
    #[must_use]
    pub fn winner(&self) -> Option<&ParticipantScore> {
        self.scores.first()
    }
}

impl<'a> IntoIterator for &'a ScoreResult {
    type Item = &'a ParticipantScore;
    type IntoIter = std::slice::Iter<'a, ParticipantScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}
