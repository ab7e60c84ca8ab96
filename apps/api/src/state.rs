use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless extractor; cloning only bumps the OCR engine's refcount.
    pub extractor: TextExtractor,
}
