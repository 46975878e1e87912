use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::reading::parse_leading_f64;
use crate::models::{MealEntry, NutritionReading};

/// Prompt for one nutrient amount. Unparsable answers count as 0.
fn prompt_amount(label: &str, unit: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{} ({})", label, unit))
        .default("0".to_string())
        .interact_text()?;

    Ok(parse_leading_f64(&input))
}

/// Manual entry of a full nutrition reading. Negative answers become 0.
pub fn prompt_reading() -> Result<NutritionReading> {
    let calories = prompt_amount("Calories", "kcal")?;
    let protein = prompt_amount("Protein", "g")?;
    let carbs = prompt_amount("Carbs", "g")?;
    let sugars = prompt_amount("Sugars", "g")?;
    let fats = prompt_amount("Fats", "g")?;
    let sodium = prompt_amount("Sodium", "mg")?;

    Ok(NutritionReading::new(
        calories, protein, carbs, sugars, fats, sodium,
    ))
}

/// Let the user pick among journal entries that matched a name query.
///
/// Returns `None` when the user declines every candidate.
pub fn prompt_entry_choice<'a>(candidates: &[&'a MealEntry]) -> Result<Option<&'a MealEntry>> {
    match candidates {
        [] => Ok(None),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}' ({})?", only.food_name, only.date))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(*only))
        }
        _ => {
            let shown: Vec<&MealEntry> = candidates.iter().take(5).copied().collect();
            let mut options: Vec<String> = shown
                .iter()
                .map(|e| format!("{} ({}, {:.0} cal)", e.food_name, e.date, e.calories))
                .collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which meal did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok(shown.get(selection).copied())
        }
    }
}
