//! In-memory store implementation.
//!
//! Backs the CLI and the tests; the application's real database lives
//! outside this crate.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::{Forecast, Question, QuestionId, ScoreResult};
use crate::error::Result;
use crate::port::{ForecastStore, ScoreStore};

/// In-memory question, forecast and score store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    questions: RwLock<HashMap<QuestionId, Question>>,
    forecasts: RwLock<HashMap<QuestionId, Vec<Forecast>>>,
    scores: RwLock<HashMap<QuestionId, ScoreResult>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a question.
    pub fn insert_question(&self, question: Question) {
        self.questions
            .write()
            .insert(question.id().clone(), question);
    }

    /// Append forecasts to a question's history.
    pub fn add_forecasts(&self, id: &QuestionId, forecasts: impl IntoIterator<Item = Forecast>) {
        self.forecasts
            .write()
            .entry(id.clone())
            .or_default()
            .extend(forecasts);
    }

    /// Number of questions with stored scores.
    #[must_use]
    pub fn scored_questions(&self) -> usize {
        self.scores.read().len()
    }
}

impl ForecastStore for MemoryStore {
    async fn question(&self, id: &QuestionId) -> Result<Option<Question>> {
        Ok(self.questions.read().get(id).cloned())
    }

    async fn forecasts(&self, id: &QuestionId) -> Result<Vec<Forecast>> {
        Ok(self.forecasts.read().get(id).cloned().unwrap_or_default())
    }
}

impl ScoreStore for MemoryStore {
    async fn upsert(&self, id: &QuestionId, result: &ScoreResult) -> Result<()> {
        self.scores.write().insert(id.clone(), result.clone());
        Ok(())
    }

    async fn get(&self, id: &QuestionId) -> Result<Option<ScoreResult>> {
        Ok(self.scores.read().get(id).cloned())
    }
}
