//! Notifier port for scoring events.
//!
//! Delivery and rendering (chat messages, e-mail) live outside this crate;
//! this module only defines the events and the trait adapters implement.

use crate::domain::{QuestionId, ScoreResult};

/// Events that can trigger notifications.
#[derive(Debug, Clone)]
pub enum Event {
    /// A question was scored and its result stored.
    QuestionScored(ScoredEvent),
    /// Scoring a question failed on invalid input.
    ScoringFailed {
        /// The question that could not be scored.
        question_id: QuestionId,
        /// Why scoring failed.
        reason: String,
    },
}

/// Summary of a scored question.
#[derive(Debug, Clone)]
pub struct ScoredEvent {
    /// The scored question.
    pub question_id: QuestionId,
    /// Number of scored participants.
    pub participants: usize,
    /// Best-ranked participant and their relative score.
    pub leader: Option<(String, f64)>,
}

impl ScoredEvent {
    /// Summarise a score result.
    #[must_use]
    pub fn new(question_id: QuestionId, result: &ScoreResult) -> Self {
        Self {
            question_id,
            participants: result.len(),
            leader: result
                .winner()
                .map(|w| (w.participant_id.to_string(), w.relative_score)),
        }
    }
}

/// Trait for notification handlers.
///
/// Implementations must be thread-safe and return quickly; slow delivery
/// belongs on a spawned task.
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Notifier for NotifierRegistry {
    fn notify(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        use tracing::{info, warn};
        match event {
            Event::QuestionScored(e) => match e.leader {
                Some((leader, relative)) => info!(
                    question_id = %e.question_id,
                    participants = e.participants,
                    leader = %leader,
                    relative_score = relative,
                    "Question scored"
                ),
                None => info!(question_id = %e.question_id, "Question scored"),
            },
            Event::ScoringFailed {
                question_id,
                reason,
            } => {
                warn!(question_id = %question_id, reason = %reason, "Scoring failed");
            }
        }
    }
}
