//! JSON question documents.
//!
//! A document bundles one question with its full forecast history:
//!
//! ```json
//! {
//!   "question": {
//!     "id": "q-1",
//!     "created_at": "2024-01-01T00:00:00Z",
//!     "resolved_at": "2024-01-08T00:00:00Z",
//!     "resolution": "YES"
//!   },
//!   "forecasts": [
//!     { "participant_id": "alice", "probability": 0.9, "submitted_at": "2024-01-01T00:00:00Z" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::memory::MemoryStore;
use crate::domain::{Forecast, Question};
use crate::error::{Result, StoreError};

/// A question and its forecasts, as exported by the application database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDocument {
    pub question: Question,
    #[serde(default)]
    pub forecasts: Vec<Forecast>,
}

impl QuestionDocument {
    /// Read a document from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| StoreError::Document {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| {
            StoreError::Document {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Parse a document from JSON text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load the document into a memory store.
    pub fn seed(self, store: &MemoryStore) {
        let id = self.question.id().clone();
        store.insert_question(self.question);
        store.add_forecasts(&id, self.forecasts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{QuestionId, Resolution};
    use crate::error::Error;
    use crate::port::ForecastStore;

    const DOCUMENT: &str = r#"{
        "question": {
            "id": "q-1",
            "created_at": "2024-01-01T00:00:00Z",
            "resolved_at": "2024-01-08T00:00:00Z",
            "resolution": "NO"
        },
        "forecasts": [
            { "participant_id": "alice", "probability": 0.9, "submitted_at": "2024-01-01T00:00:00Z" },
            { "participant_id": "bob", "probability": 0.2, "submitted_at": "2024-01-03T00:00:00Z" }
        ]
    }"#;

    #[test]
    fn parses_question_and_forecasts() {
        let doc = QuestionDocument::parse(DOCUMENT).unwrap();
        assert_eq!(doc.question.id(), &QuestionId::new("q-1"));
        assert_eq!(doc.question.resolution(), Resolution::No);
        assert_eq!(doc.forecasts.len(), 2);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = QuestionDocument::parse("{\"question\": 3}").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn missing_file_is_a_store_error() {
        let err = QuestionDocument::load("/nonexistent/brierly/q.json").unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Document { .. })));
    }

    #[tokio::test]
    async fn seed_populates_memory_store() {
        let store = MemoryStore::new();
        QuestionDocument::parse(DOCUMENT).unwrap().seed(&store);

        let id = QuestionId::new("q-1");
        assert!(store.question(&id).await.unwrap().is_some());
        assert_eq!(store.forecasts(&id).await.unwrap().len(), 2);
    }
}
