use crate::insights::constants::*;
use crate::models::{
    AlternativeSuggestion, AlternativeSuggestionGroup, Concern, NutritionAnalysis,
    NutritionReading, Recommendation,
};

fn group(category: &str, table: &[SuggestionText]) -> AlternativeSuggestionGroup {
    AlternativeSuggestionGroup {
        category: category.to_string(),
        suggestions: table
            .iter()
            .map(|s| AlternativeSuggestion {
                title: s.title.to_string(),
                description: s.description.to_string(),
                benefit: s.benefit.to_string(),
            })
            .collect(),
    }
}

/// Healthier-alternative groups for the problems found in `analysis`.
///
/// Groups always come out in the order sodium, sugar, calories, protein,
/// whatever order the concerns were recorded in. The protein group keys off
/// the `AddProtein` recommendation because low protein is not a concern.
/// An empty result means nothing needs replacing.
pub fn suggest_alternatives(
    _reading: &NutritionReading,
    analysis: &NutritionAnalysis,
) -> Vec<AlternativeSuggestionGroup> {
    let mut groups = Vec::new();

    if analysis.has_concern(Concern::HighSodium) {
        groups.push(group(CATEGORY_LOW_SODIUM, &LOW_SODIUM_SUGGESTIONS));
    }

    if analysis.has_concern(Concern::HighSugar) {
        groups.push(group(CATEGORY_LOWER_SUGAR, &LOWER_SUGAR_SUGGESTIONS));
    }

    if analysis.has_concern(Concern::VeryHighCalories) {
        groups.push(group(
            CATEGORY_CALORIE_CONSCIOUS,
            &CALORIE_CONSCIOUS_SUGGESTIONS,
        ));
    }

    if analysis.recommends(Recommendation::AddProtein) {
        groups.push(group(CATEGORY_PROTEIN_BOOST, &PROTEIN_BOOST_SUGGESTIONS));
    }

    groups
}
