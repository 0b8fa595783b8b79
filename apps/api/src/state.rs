use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::QuoteWriter;
use crate::quotes::store::QuoteStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub store: Arc<QuoteStore>,
    /// `LlmClient` in production, a stub in tests.
    pub writer: Arc<dyn QuoteWriter>,
    pub config: Config,
}
