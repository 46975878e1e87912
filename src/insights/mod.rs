pub mod alternatives;
pub mod analyzer;
pub mod constants;
pub mod facts;
pub mod report;

pub use alternatives::suggest_alternatives;
pub use analyzer::{analyze, clamp_score, macro_ratios};
pub use facts::{relevant_facts, select_facts, select_facts_with};
pub use report::{build_report, build_report_with, MealReport};
