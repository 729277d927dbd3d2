use std::sync::Arc;

use crate::interview::AiService;
use crate::providers::{ProviderDirectory, ProviderStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Alias directory; swapped wholesale by the reload endpoint.
    pub directory: Arc<ProviderDirectory>,
    /// Backing store the directory reloads from. Postgres in production.
    pub provider_store: Arc<dyn ProviderStore>,
    pub ai: AiService,
}
