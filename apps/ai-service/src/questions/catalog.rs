//! Static question sets, one per product category.
//!
//! Templates live in constant tables; every lookup builds fresh owned
//! `Question` values so no request ever shares an instance with another.

use serde_json::{Map, Value};

use crate::questions::models::{ProductCategory, Question, QuestionKind};

struct QuestionTemplate {
    id: &'static str,
    text: &'static str,
    kind: QuestionKind,
    options: &'static [&'static str],
    required: bool,
}

impl QuestionTemplate {
    fn build(&self) -> Question {
        let options = self
            .kind
            .takes_options()
            .then(|| self.options.iter().map(|o| o.to_string()).collect());
        Question {
            id: self.id.to_string(),
            text: self.text.to_string(),
            kind: self.kind,
            options,
            required: self.required,
        }
    }
}

const FOOD_QUESTIONS: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "ingredients",
        text: "Please list all ingredients in your product",
        kind: QuestionKind::TextArea,
        options: &[],
        required: true,
    },
    QuestionTemplate {
        id: "allergens",
        text: "Does your product contain any allergens?",
        kind: QuestionKind::MultiSelect,
        options: &["Nuts", "Dairy", "Gluten", "Soy", "Eggs", "Fish", "Shellfish"],
        required: true,
    },
    QuestionTemplate {
        id: "certifications",
        text: "What certifications does your product have?",
        kind: QuestionKind::MultiSelect,
        options: &["Organic", "Fair Trade", "Non-GMO", "Kosher", "Halal"],
        required: false,
    },
    QuestionTemplate {
        id: "sourcing",
        text: "Where are your main ingredients sourced from?",
        kind: QuestionKind::TextArea,
        options: &[],
        required: true,
    },
];

const COSMETICS_QUESTIONS: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "ingredients",
        text: "List all active and inactive ingredients",
        kind: QuestionKind::TextArea,
        options: &[],
        required: true,
    },
    QuestionTemplate {
        id: "animal_testing",
        text: "Is this product tested on animals?",
        kind: QuestionKind::Select,
        options: &["Yes", "No", "Not Sure"],
        required: true,
    },
    QuestionTemplate {
        id: "vegan",
        text: "Is this product vegan?",
        kind: QuestionKind::Select,
        options: &["Yes", "No", "Contains some animal-derived ingredients"],
        required: true,
    },
];

const GENERAL_QUESTIONS: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "materials",
        text: "What materials is your product made from?",
        kind: QuestionKind::TextArea,
        options: &[],
        required: true,
    },
    QuestionTemplate {
        id: "manufacturing",
        text: "Where is your product manufactured?",
        kind: QuestionKind::Text,
        options: &[],
        required: true,
    },
    QuestionTemplate {
        id: "sustainability",
        text: "What sustainability practices do you follow?",
        kind: QuestionKind::TextArea,
        options: &[],
        required: false,
    },
];

fn templates_for(category: ProductCategory) -> &'static [QuestionTemplate] {
    match category {
        ProductCategory::Food => FOOD_QUESTIONS,
        ProductCategory::Cosmetics => COSMETICS_QUESTIONS,
        ProductCategory::General => GENERAL_QUESTIONS,
    }
}

/// Returns the ordered question set for `category`. Never empty.
///
/// `previous_answers` is part of the public contract but does not yet
/// influence the result.
pub fn get_questions(category: &str, _previous_answers: &Map<String, Value>) -> Vec<Question> {
    questions_for(ProductCategory::from_raw(category))
}

pub fn questions_for(category: ProductCategory) -> Vec<Question> {
    templates_for(category)
        .iter()
        .map(QuestionTemplate::build)
        .collect()
}
