//! Persistence ports for questions, forecasts and computed scores.

use std::future::Future;

use crate::domain::{Forecast, Question, QuestionId, ScoreResult};
use crate::error::Result;

/// Read access to resolved questions and their forecast history.
pub trait ForecastStore: Send + Sync {
    /// Get a question by ID.
    fn question(&self, id: &QuestionId) -> impl Future<Output = Result<Option<Question>>> + Send;

    /// All forecasts ever submitted on a question, in submission order.
    fn forecasts(&self, id: &QuestionId) -> impl Future<Output = Result<Vec<Forecast>>> + Send;
}

/// Storage for computed scores.
pub trait ScoreStore: Send + Sync {
    /// Save the scores of a question, replacing any previous result.
    ///
    /// Each (question, participant) pair holds at most one score after this
    /// returns.
    fn upsert(
        &self,
        id: &QuestionId,
        result: &ScoreResult,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Get the stored scores of a question.
    fn get(&self, id: &QuestionId) -> impl Future<Output = Result<Option<ScoreResult>>> + Send;
}
