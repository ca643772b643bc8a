use std::sync::Arc;

use crate::generation::generator::ContentGenerator;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable content generator. Default: LlmContentGenerator.
    pub generator: Arc<dyn ContentGenerator>,
}
