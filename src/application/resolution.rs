//! Question resolution service.
//!
//! Runs when a question resolves (or when its scores are recomputed): loads
//! the question and its forecasts, scores them, stores the result and
//! notifies. Scoring itself is pure; this service only moves data between
//! the ports and the domain.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::{score, QuestionId, ScoreResult};
use crate::error::{Result, StoreError};
use crate::port::{Event, ForecastStore, Notifier, ScoreStore, ScoredEvent};

/// Scores resolved questions and persists the results.
pub struct ResolutionService<F, S> {
    forecasts: Arc<F>,
    scores: Arc<S>,
    notifier: Arc<dyn Notifier>,
}

impl<F, S> ResolutionService<F, S>
where
    F: ForecastStore,
    S: ScoreStore,
{
    /// Create a service over the given stores and notifier.
    pub fn new(forecasts: Arc<F>, scores: Arc<S>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            forecasts,
            scores,
            notifier,
        }
    }

    /// Score a resolved question and upsert its result.
    ///
    /// Invalid input is reported to the notifier and then returned; nothing
    /// is stored for a question that fails to score.
    #[instrument(skip(self), fields(question_id = %id))]
    pub async fn resolve(&self, id: &QuestionId) -> Result<ScoreResult> {
        let question = self
            .forecasts
            .question(id)
            .await?
            .ok_or_else(|| StoreError::QuestionNotFound(id.clone()))?;
        let forecasts = self.forecasts.forecasts(id).await?;
        debug!(
            forecasts = forecasts.len(),
            resolution = %question.resolution(),
            "Scoring question"
        );

        let result = match score(&question, &forecasts) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Question rejected by scorer");
                self.notifier.notify(Event::ScoringFailed {
                    question_id: id.clone(),
                    reason: e.to_string(),
                });
                return Err(e.into());
            }
        };

        self.scores.upsert(id, &result).await?;
        info!(participants = result.len(), "Scores stored");
        self.notifier
            .notify(Event::QuestionScored(ScoredEvent::new(id.clone(), &result)));

        Ok(result)
    }

    /// Score several questions, stopping at the first failure.
    pub async fn resolve_all(&self, ids: &[QuestionId]) -> Result<Vec<ScoreResult>> {
        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            results.push(self.resolve(id).await?);
        }
        Ok(results)
    }
}
