use serde::{Deserialize, Serialize};

use crate::models::reading::{lenient_f64, NutritionReading};

/// A meal as logged by the tracking API.
///
/// Field names follow the stored documents (`fat`, `sugar`), which differ
/// from [`NutritionReading`]; use [`MealEntry::reading`] to normalise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    #[serde(default)]
    pub id: Option<String>,

    /// Calendar day, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub meal_type: Option<String>,

    #[serde(default, alias = "name")]
    pub food_name: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium: f64,

    #[serde(default)]
    pub created_at: Option<String>,
}

impl MealEntry {
    /// Nutrition reading for this meal.
    pub fn reading(&self) -> NutritionReading {
        NutritionReading::new(
            self.calories,
            self.protein,
            self.carbs,
            self.sugar,
            self.fat,
            self.sodium,
        )
    }

    /// Canonical key for name lookups (lowercase food name).
    pub fn key(&self) -> String {
        self.food_name.to_lowercase()
    }
}
