use serde::{Deserialize, Serialize};

/// One concrete swap or addition the user could make.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeSuggestion {
    pub title: String,
    pub description: String,
    pub benefit: String,
}

/// Suggestions answering a single concern category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeSuggestionGroup {
    pub category: String,
    pub suggestions: Vec<AlternativeSuggestion>,
}
