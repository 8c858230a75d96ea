//! Composition root: wires configuration, stores and notifiers together.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::memory::MemoryStore;
use crate::application::ResolutionService;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::notifier::{LogNotifier, NotifierRegistry};

/// Build the notifier registry from configuration.
#[must_use]
pub fn build_notifier_registry(config: &Config) -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    if config.notifications.log {
        registry.register(Box::new(LogNotifier));
    }
    debug!(notifiers = registry.len(), "Notifier registry built");
    registry
}

/// Build a resolution service reading from and writing to one memory store.
#[must_use]
pub fn build_resolution_service(
    config: &Config,
    store: Arc<MemoryStore>,
) -> ResolutionService<MemoryStore, MemoryStore> {
    let notifier = Arc::new(build_notifier_registry(config));
    ResolutionService::new(store.clone(), store, notifier)
}
