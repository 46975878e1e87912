pub mod alternative;
pub mod analysis;
pub mod meal;
pub mod reading;

pub use alternative::{AlternativeSuggestion, AlternativeSuggestionGroup};
pub use analysis::{
    Concern, HealthGrade, Insight, InsightKind, MacroRatios, NutritionAnalysis, Positive,
    Recommendation,
};
pub use meal::MealEntry;
pub use reading::NutritionReading;
