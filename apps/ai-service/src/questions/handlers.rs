use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::questions::models::{ProductCategory, Question};
use crate::state::AppState;

pub const MAX_CATEGORY_CHARS: usize = 100;

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub product_category: Option<String>,
    #[serde(default)]
    pub previous_answers: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Question>,
}

/// Rejects a missing, empty or over-long category before any lookup.
fn validate_category(raw: Option<&str>) -> Result<&str, AppError> {
    match raw {
        Some(category) if !category.is_empty() && category.chars().count() <= MAX_CATEGORY_CHARS => {
            Ok(category)
        }
        _ => Err(AppError::Validation("Invalid product category".to_string())),
    }
}

/// POST /generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQuestionsRequest>, JsonRejection>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let Json(request) = payload?;
    let category = validate_category(request.product_category.as_deref())?;

    let questions = state
        .question_generator
        .generate(category, &request.previous_answers)
        .await?;

    tracing::info!(
        category = ProductCategory::from_raw(category).key(),
        count = questions.len(),
        "Generated follow-up questions"
    );

    Ok(Json(GenerateQuestionsResponse { questions }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_category_rejected() {
        assert!(validate_category(None).is_err());
    }

    #[test]
    fn test_empty_category_rejected() {
        assert!(validate_category(Some("")).is_err());
    }

    #[test]
    fn test_length_limit_counts_characters() {
        let at_limit = "a".repeat(MAX_CATEGORY_CHARS);
        assert!(validate_category(Some(&at_limit)).is_ok());

        let over_limit = "a".repeat(MAX_CATEGORY_CHARS + 1);
        assert!(validate_category(Some(&over_limit)).is_err());

        // 100 two-byte characters is still within the limit
        let multibyte = "é".repeat(MAX_CATEGORY_CHARS);
        assert!(validate_category(Some(&multibyte)).is_ok());
    }

    #[test]
    fn test_whitespace_only_passes_to_lookup() {
        assert_eq!(validate_category(Some("   ")).unwrap(), "   ");
    }
}
