//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: Builders for questions and forecasts anchored at a fixed instant.
//! - [`notifier`]: [`RecordingNotifier`](notifier::RecordingNotifier) for asserting on events.

pub mod domain;
pub mod notifier;
