use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::insights::{analyze, select_facts_with, suggest_alternatives};
use crate::models::{AlternativeSuggestionGroup, NutritionAnalysis, NutritionReading};

/// Everything the detail view or dashboard renders for one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub reading: NutritionReading,
    pub analysis: NutritionAnalysis,
    pub alternatives: Vec<AlternativeSuggestionGroup>,
    pub facts: Vec<String>,
}

/// Run the analyzer, advisor and fact selector over one reading.
pub fn build_report(reading: &NutritionReading) -> MealReport {
    build_report_with(reading, &mut rand::thread_rng())
}

/// [`build_report`] with a caller-supplied random source for the facts.
pub fn build_report_with<R: Rng + ?Sized>(reading: &NutritionReading, rng: &mut R) -> MealReport {
    let reading = reading.sanitized();
    let analysis = analyze(&reading);
    let alternatives = suggest_alternatives(&reading, &analysis);
    let facts = select_facts_with(&reading, rng);

    MealReport {
        label: None,
        reading,
        analysis,
        alternatives,
        facts,
    }
}

impl MealReport {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
