use tracing::debug;

use crate::insights::constants::*;
use crate::models::{
    Concern, HealthGrade, Insight, InsightKind, MacroRatios, NutritionAnalysis, NutritionReading,
    Positive, Recommendation,
};

/// Working state while the rules are evaluated.
struct Findings {
    score: i32,
    concerns: Vec<Concern>,
    positives: Vec<Positive>,
    recommendations: Vec<Recommendation>,
    insights: Vec<Insight>,
}

impl Findings {
    fn new() -> Self {
        Self {
            score: MAX_HEALTH_SCORE,
            concerns: Vec::new(),
            positives: Vec::new(),
            recommendations: Vec::new(),
            insights: Vec::new(),
        }
    }

    fn concern(&mut self, concern: Concern, penalty: i32) {
        debug!(concern = concern.label(), penalty, "rule fired");
        self.concerns.push(concern);
        self.score -= penalty;
    }
}

/// Score a reading and explain the result.
///
/// Pure and total: any reading, including one with non-finite or negative
/// fields, yields an analysis. Every rule is evaluated independently in a
/// fixed order, so `concerns`, `positives`, `recommendations` and `insights`
/// are always listed in that order.
pub fn analyze(reading: &NutritionReading) -> NutritionAnalysis {
    let r = reading.sanitized();
    let mut found = Findings::new();

    sodium_rules(&r, &mut found);
    sugar_rules(&r, &mut found);
    calorie_rules(&r, &mut found);
    protein_rules(&r, &mut found);
    fat_rules(&r, &mut found);

    let macro_ratios = macro_ratios(&r);
    if let Some(ratios) = macro_ratios {
        if ratios.protein_percent >= BALANCED_PROTEIN_PERCENT {
            found.insights.push(Insight::new(
                InsightKind::Positive,
                TITLE_BALANCED_PROTEIN,
                format!("Great protein balance ({}% of macros)!", ratios.protein_percent),
            ));
        }
    }

    let health_score = clamp_score(found.score);
    let health_grade = HealthGrade::from_score(health_score);

    debug!(
        score = health_score,
        grade = health_grade.as_str(),
        concerns = found.concerns.len(),
        positives = found.positives.len(),
        "analysis complete"
    );

    NutritionAnalysis {
        health_score,
        health_grade,
        overall_message: health_grade.message().to_string(),
        concerns: found.concerns,
        positives: found.positives,
        recommendations: found.recommendations,
        insights: found.insights,
        macro_ratios,
    }
}

fn sodium_rules(r: &NutritionReading, found: &mut Findings) {
    if r.sodium > HIGH_SODIUM_MG {
        found.concern(Concern::HighSodium, HIGH_SODIUM_PENALTY);
        found.recommendations.push(Recommendation::ReduceSodium);
        found.insights.push(
            Insight::new(
                InsightKind::Concern,
                TITLE_HIGH_SODIUM,
                format!(
                    "This meal contains {}mg of sodium. High sodium intake can contribute to high blood pressure.",
                    r.sodium
                ),
            )
            .with_tip(TIP_HIGH_SODIUM),
        );
    } else if r.sodium < LOW_SODIUM_MG {
        found.positives.push(Positive::LowSodium);
        found.insights.push(Insight::new(
            InsightKind::Positive,
            TITLE_LOW_SODIUM,
            MSG_LOW_SODIUM.to_string(),
        ));
    }
}

fn sugar_rules(r: &NutritionReading, found: &mut Findings) {
    if r.sugars > HIGH_SUGAR_G {
        found.concern(Concern::HighSugar, HIGH_SUGAR_PENALTY);
        found.recommendations.push(Recommendation::LowerSugar);
        found.insights.push(
            Insight::new(
                InsightKind::Concern,
                TITLE_HIGH_SUGAR,
                format!(
                    "This meal contains {}g of sugar. Consider pairing with protein to help stabilize blood sugar.",
                    r.sugars
                ),
            )
            .with_tip(TIP_HIGH_SUGAR),
        );
    }
}

fn calorie_rules(r: &NutritionReading, found: &mut Findings) {
    if r.calories > CALORIE_DENSE_KCAL {
        found.insights.push(Insight::new(
            InsightKind::Info,
            TITLE_CALORIE_DENSE,
            format!(
                "This is a calorie-dense meal ({} calories). Great for post-workout or when you need sustained energy.",
                r.calories
            ),
        ));
        if r.calories > VERY_HIGH_CALORIES_KCAL {
            found.concern(Concern::VeryHighCalories, VERY_HIGH_CALORIES_PENALTY);
        }
    } else if r.calories < LIGHT_MEAL_KCAL {
        found.insights.push(Insight::new(
            InsightKind::Info,
            TITLE_LIGHT_MEAL,
            MSG_LIGHT_MEAL.to_string(),
        ));
    }
}

fn protein_rules(r: &NutritionReading, found: &mut Findings) {
    if r.protein > GOOD_PROTEIN_G {
        found.positives.push(Positive::GoodProteinSource);
        found.insights.push(Insight::new(
            InsightKind::Positive,
            TITLE_GOOD_PROTEIN,
            format!(
                "Excellent protein content ({}g)! Protein helps with muscle maintenance and satiety.",
                r.protein
            ),
        ));
    } else if r.protein < LOW_PROTEIN_G {
        found.recommendations.push(Recommendation::AddProtein);
        found.insights.push(
            Insight::new(
                InsightKind::Suggestion,
                TITLE_LOW_PROTEIN,
                MSG_LOW_PROTEIN.to_string(),
            )
            .with_tip(TIP_LOW_PROTEIN),
        );
    }
}

fn fat_rules(r: &NutritionReading, found: &mut Findings) {
    if r.fats > HIGH_FAT_G {
        found.insights.push(Insight::new(
            InsightKind::Info,
            TITLE_FAT_CONTENT,
            format!(
                "This meal is relatively high in fats ({}g). If these are healthy fats from sources like avocado or nuts, that's great!",
                r.fats
            ),
        ));
    }
}

/// Percent split of protein/carbs/fats, or `None` when all three are zero.
///
/// Each share is rounded independently, so the sum may drift from 100 by one.
pub fn macro_ratios(reading: &NutritionReading) -> Option<MacroRatios> {
    let total = reading.total_macros();
    if total <= 0.0 {
        return None;
    }

    let percent = |part: f64| ((part / total) * 100.0).round() as u32;

    Some(MacroRatios {
        protein_percent: percent(reading.protein),
        carb_percent: percent(reading.carbs),
        fat_percent: percent(reading.fats),
    })
}

/// Keep a score inside 0..=100.
pub fn clamp_score(score: i32) -> i32 {
    score.clamp(MIN_HEALTH_SCORE, MAX_HEALTH_SCORE)
}
