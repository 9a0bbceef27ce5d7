use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The generative model backing all three tools. Trait object so tests can
    /// substitute a fake client for the production `GeminiClient`.
    pub model: Arc<dyn ModelClient>,
    pub config: Config,
}
