//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the collaborators the scorer is wired to at
//! resolution time: the forecast store, the score store and notifiers.

pub mod notifier;
pub mod store;
