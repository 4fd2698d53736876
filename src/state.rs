//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkRegistry, RedirectResolver};
use crate::domain::repositories::LinkRepository;

/// Handler-facing state: the registry and the redirect resolver, both over
/// the storage backend chosen at startup.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<LinkRegistry>,
    pub resolver: Arc<RedirectResolver>,
}

impl AppState {
    /// Builds the services over one shared storage backend.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            registry: Arc::new(LinkRegistry::new(repository.clone())),
            resolver: Arc::new(RedirectResolver::new(repository)),
        }
    }
}
