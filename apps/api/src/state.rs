use std::sync::Arc;

use crate::config::Config;
use crate::generation::gateway::GenerationGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: GenerationGateway,
}
