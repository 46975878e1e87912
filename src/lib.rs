pub mod cli;
pub mod error;
pub mod insights;
pub mod intake;
pub mod interface;
pub mod journal;
pub mod models;

pub use error::{BiteError, Result};
pub use insights::{analyze, select_facts, suggest_alternatives, MealReport};
pub use models::{NutritionAnalysis, NutritionReading};
