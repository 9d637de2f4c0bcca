use serde::Serialize;

/// How a question is answered in the product form.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum QuestionKind {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "textarea")]
    TextArea,
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "multi-select")]
    MultiSelect,
}

impl QuestionKind {
    pub fn takes_options(self) -> bool {
        matches!(self, QuestionKind::Select | QuestionKind::MultiSelect)
    }
}

/// A single follow-up question. `options` is `Some` (and non-empty) exactly
/// when the kind is a select kind.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub options: Option<Vec<String>>,
    pub required: bool,
}

/// Product category used to pick a question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCategory {
    Food,
    Cosmetics,
    General,
}

impl ProductCategory {
    /// Trims and lowercases `raw`, then matches exactly. Anything unknown,
    /// including the empty string, is `General`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "food" => ProductCategory::Food,
            "cosmetics" => ProductCategory::Cosmetics,
            _ => ProductCategory::General,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ProductCategory::Food => "food",
            ProductCategory::Cosmetics => "cosmetics",
            ProductCategory::General => "general",
        }
    }
}
