use serde::{Deserialize, Serialize};

use crate::models::NutritionReading;

pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;
pub const DEFAULT_PROTEIN_GOAL_G: f64 = 150.0;
pub const DEFAULT_CARBS_GOAL_G: f64 = 250.0;
pub const DEFAULT_FAT_GOAL_G: f64 = 65.0;

/// Progress at or above this percent counts as close to the goal.
pub const CLOSE_TO_GOAL_PERCENT: f64 = 75.0;

/// Daily intake targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIE_GOAL,
            protein: DEFAULT_PROTEIN_GOAL_G,
            carbs: DEFAULT_CARBS_GOAL_G,
            fat: DEFAULT_FAT_GOAL_G,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Reached,
    Close,
    Behind,
}

/// How far one day's total has come toward one goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub nutrient: &'static str,
    pub unit: &'static str,
    pub goal: f64,
    pub total: f64,
    /// `max(goal - total, 0)`.
    pub remaining: f64,
    /// `min(total / goal * 100, 100)`; 0 when no goal is set.
    pub percent: f64,
    pub status: GoalStatus,
}

impl GoalProgress {
    pub fn new(nutrient: &'static str, unit: &'static str, goal: f64, total: f64) -> Self {
        let percent = if goal > 0.0 {
            (total / goal * 100.0).min(100.0)
        } else {
            0.0
        };
        let status = if percent >= 100.0 {
            GoalStatus::Reached
        } else if percent >= CLOSE_TO_GOAL_PERCENT {
            GoalStatus::Close
        } else {
            GoalStatus::Behind
        };

        Self {
            nutrient,
            unit,
            goal,
            total,
            remaining: (goal - total).max(0.0),
            percent,
            status,
        }
    }
}

impl Goals {
    /// Progress for calories, protein, carbs and fat, in that order.
    pub fn progress(&self, totals: &NutritionReading) -> Vec<GoalProgress> {
        let t = totals.sanitized();
        vec![
            GoalProgress::new("calories", "cal", self.calories, t.calories),
            GoalProgress::new("protein", "g", self.protein, t.protein),
            GoalProgress::new("carbs", "g", self.carbs, t.carbs),
            GoalProgress::new("fat", "g", self.fat, t.fats),
        ]
    }
}
