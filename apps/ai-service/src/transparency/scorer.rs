//! Transparency scoring: four independent sub-scorers, a capped combiner and
//! threshold-driven recommendations.
//!
//! Sub-score ranges:
//! - ingredients:    {0, 20}
//! - sourcing:       {0, 25}
//! - certifications: {0, 5, 10, 15, 20}
//! - environmental:  {0, 10, 20}
//!
//! The attainable maximum is 85, so the 100-point cap never fires under the
//! current weights. It stays in place for when the weights change.

use serde::Serialize;

use crate::transparency::product::ProductRecord;

pub const MAX_SCORE: u32 = 100;

const INGREDIENTS_POINTS: u32 = 20;
const SOURCING_POINTS: u32 = 25;
const POINTS_PER_CERTIFICATION: u32 = 5;
const CERTIFICATIONS_CAP: u32 = 20;
const LOW_IMPACT_POINTS: u32 = 20;
const MEDIUM_IMPACT_POINTS: u32 = 10;

const INGREDIENTS_THRESHOLD: u32 = 15;
const SOURCING_THRESHOLD: u32 = 20;
const CERTIFICATIONS_THRESHOLD: u32 = 15;
const ENVIRONMENTAL_THRESHOLD: u32 = 15;

pub const INGREDIENTS_ADVICE: &str = "Provide more detailed ingredient information";
pub const SOURCING_ADVICE: &str = "Add supply chain transparency information";
pub const CERTIFICATIONS_ADVICE: &str = "Consider obtaining relevant certifications";
pub const ENVIRONMENTAL_ADVICE: &str = "Include environmental impact data and carbon footprint";

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub ingredients: u32,
    pub sourcing: u32,
    pub certifications: u32,
    pub environmental: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.ingredients
            .saturating_add(self.sourcing)
            .saturating_add(self.certifications)
            .saturating_add(self.environmental)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransparencyReport {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
}

pub fn score_ingredients(product: &ProductRecord) -> u32 {
    if product.is_truthy("ingredients_disclosed") {
        INGREDIENTS_POINTS
    } else {
        0
    }
}

pub fn score_sourcing(product: &ProductRecord) -> u32 {
    if product.is_truthy("sourcing_info") {
        SOURCING_POINTS
    } else {
        0
    }
}

pub fn score_certifications(product: &ProductRecord) -> u32 {
    let count = u32::try_from(product.list_len("certifications")).unwrap_or(u32::MAX);
    count
        .saturating_mul(POINTS_PER_CERTIFICATION)
        .min(CERTIFICATIONS_CAP)
}

pub fn score_environmental(product: &ProductRecord) -> u32 {
    match product.text("environmental_impact") {
        Some("low") => LOW_IMPACT_POINTS,
        Some("medium") => MEDIUM_IMPACT_POINTS,
        _ => 0,
    }
}

pub fn compute_breakdown(product: &ProductRecord) -> ScoreBreakdown {
    ScoreBreakdown {
        ingredients: score_ingredients(product),
        sourcing: score_sourcing(product),
        certifications: score_certifications(product),
        environmental: score_environmental(product),
    }
}

pub fn combine(breakdown: &ScoreBreakdown) -> u32 {
    breakdown.total().min(MAX_SCORE)
}

/// One advisory per sub-score strictly below its threshold, in breakdown order.
pub fn generate_recommendations(breakdown: &ScoreBreakdown) -> Vec<String> {
    [
        (breakdown.ingredients, INGREDIENTS_THRESHOLD, INGREDIENTS_ADVICE),
        (breakdown.sourcing, SOURCING_THRESHOLD, SOURCING_ADVICE),
        (breakdown.certifications, CERTIFICATIONS_THRESHOLD, CERTIFICATIONS_ADVICE),
        (breakdown.environmental, ENVIRONMENTAL_THRESHOLD, ENVIRONMENTAL_ADVICE),
    ]
    .into_iter()
    .filter(|(points, threshold, _)| points < threshold)
    .map(|(_, _, advice)| advice.to_string())
    .collect()
}

pub fn score_product(product: &ProductRecord) -> TransparencyReport {
    let breakdown = compute_breakdown(product);
    TransparencyReport {
        score: combine(&breakdown),
        breakdown,
        recommendations: generate_recommendations(&breakdown),
    }
}
