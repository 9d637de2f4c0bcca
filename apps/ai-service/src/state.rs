use std::sync::Arc;

use crate::questions::generator::QuestionGenerator;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable question source. Default: CatalogQuestionGenerator.
    pub question_generator: Arc<dyn QuestionGenerator>,
}
