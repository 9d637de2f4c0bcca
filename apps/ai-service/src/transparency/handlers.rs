use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::transparency::product::ProductRecord;
use crate::transparency::scorer::{score_product, TransparencyReport};

#[derive(Debug, Deserialize)]
pub struct TransparencyScoreRequest {
    pub product_data: Option<Map<String, Value>>,
}

/// POST /transparency-score
pub async fn handle_transparency_score(
    payload: Result<Json<TransparencyScoreRequest>, JsonRejection>,
) -> Result<Json<TransparencyReport>, AppError> {
    let Json(request) = payload?;

    let fields = request.product_data.unwrap_or_default();
    let product = ProductRecord::new(&fields);
    if product.is_empty() {
        return Err(AppError::Validation("Product data is required".to_string()));
    }

    let report = score_product(&product);

    tracing::info!(
        score = report.score,
        recommendations = report.recommendations.len(),
        "Computed transparency score"
    );

    Ok(Json(report))
}
