//! Question generation: pluggable, trait-based source of follow-up questions.
//!
//! Default: `CatalogQuestionGenerator` (static tables, deterministic).
//! `AppState` holds an `Arc<dyn QuestionGenerator>`, chosen at startup.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::questions::catalog::get_questions;
use crate::questions::models::Question;

/// Implement this to swap the question backend without touching the
/// handler or router.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        category: &str,
        previous_answers: &Map<String, Value>,
    ) -> Result<Vec<Question>, AppError>;
}

/// Serves the fixed per-category question sets.
pub struct CatalogQuestionGenerator;

#[async_trait]
impl QuestionGenerator for CatalogQuestionGenerator {
    async fn generate(
        &self,
        category: &str,
        previous_answers: &Map<String, Value>,
    ) -> Result<Vec<Question>, AppError> {
        Ok(get_questions(category, previous_answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::catalog::questions_for;
    use crate::questions::models::ProductCategory;

    #[tokio::test]
    async fn test_catalog_generator_matches_catalog() {
        let generator = CatalogQuestionGenerator;
        let questions = generator
            .generate(" COSMETICS", &Map::new())
            .await
            .unwrap();
        assert_eq!(questions, questions_for(ProductCategory::Cosmetics));
    }

    #[tokio::test]
    async fn test_catalog_generator_never_empty() {
        let generator = CatalogQuestionGenerator;
        for category in ["food", "cosmetics", "furniture", ""] {
            let questions = generator.generate(category, &Map::new()).await.unwrap();
            assert!(!questions.is_empty(), "{category:?}");
        }
    }
}
