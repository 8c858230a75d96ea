use thiserror::Error;

use crate::domain::error::ScoringError;
use crate::domain::id::QuestionId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised by forecast and score stores.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("failed to read question document {path}: {reason}")]
    Document { path: String, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fixture check failed: {0}")]
    Fixture(String),
}

pub type Result<T> = std::result::Result<T, Error>;
