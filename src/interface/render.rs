use crate::insights::MealReport;
use crate::journal::{GoalProgress, GoalStatus, JournalStats};
use crate::models::{
    AlternativeSuggestionGroup, InsightKind, MealEntry, NutritionAnalysis, NutritionReading,
};

fn insight_marker(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Concern => "[!]",
        InsightKind::Positive => "[+]",
        InsightKind::Suggestion => "[>]",
        InsightKind::Info => "[i]",
    }
}

/// Display the nutrient readings a report was built from.
pub fn display_reading(reading: &NutritionReading) {
    println!(
        "  {:.0} cal | P:{}g C:{}g S:{}g F:{}g | Na:{}mg",
        reading.calories,
        reading.protein,
        reading.carbs,
        reading.sugars,
        reading.fats,
        reading.sodium
    );
}

/// Display score, grade, labels and insights.
pub fn display_analysis(analysis: &NutritionAnalysis) {
    println!(
        "Nutrition Score: {}/100  Grade {}  - {}",
        analysis.health_score, analysis.health_grade, analysis.overall_message
    );

    if !analysis.concerns.is_empty() {
        let labels: Vec<&str> = analysis.concerns.iter().map(|c| c.label()).collect();
        println!("Concerns: {}", labels.join(", "));
    }
    if !analysis.positives.is_empty() {
        let labels: Vec<&str> = analysis.positives.iter().map(|p| p.label()).collect();
        println!("Positives: {}", labels.join(", "));
    }

    if let Some(ratios) = analysis.macro_ratios {
        println!(
            "Macros: protein {}% / carbs {}% / fat {}%",
            ratios.protein_percent, ratios.carb_percent, ratios.fat_percent
        );
    }

    if !analysis.insights.is_empty() {
        println!();
        println!("--- Insights ---");
        for insight in &analysis.insights {
            println!("{} {}: {}", insight_marker(insight.kind), insight.title, insight.message);
            if let Some(tip) = &insight.tip {
                println!("    Tip: {}", tip);
            }
        }
    }

    if !analysis.recommendations.is_empty() {
        println!();
        println!("--- Recommendations ---");
        for rec in &analysis.recommendations {
            println!("  - {}", rec);
        }
    }
}

/// Display alternative groups, or the "nothing to change" state.
pub fn display_alternatives(groups: &[AlternativeSuggestionGroup]) {
    println!();
    println!("--- Healthier Alternatives ---");

    if groups.is_empty() {
        println!("This meal looks nutritionally balanced. No specific alternatives needed!");
        return;
    }

    for group in groups {
        println!("{}:", group.category);
        for s in &group.suggestions {
            println!("  * {} - {}", s.title, s.description);
            println!("      Benefit: {}", s.benefit);
        }
    }
}

pub fn display_facts(facts: &[String]) {
    println!();
    println!("--- Did you know? ---");
    for fact in facts {
        println!("  {}", fact.trim_start_matches("Did you know? "));
    }
}

/// Display a full report in text form.
pub fn display_report(report: &MealReport) {
    println!();
    match &report.label {
        Some(label) => println!("=== {} ===", label),
        None => println!("=== Meal Analysis ==="),
    }
    display_reading(&report.reading);
    println!();
    display_analysis(&report.analysis);
    display_alternatives(&report.alternatives);
    display_facts(&report.facts);
    println!();
}

fn goal_marker(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::Reached => "[x]",
        GoalStatus::Close => "[~]",
        GoalStatus::Behind => "[ ]",
    }
}

/// Display the day-by-day window, averages and streak.
pub fn display_stats(stats: &JournalStats) {
    println!();
    println!("=== Last {} days ===", stats.days.len());

    for day in &stats.days {
        if day.meal_count == 0 {
            println!("  {} {}  -", day.day_name, day.date);
        } else {
            println!(
                "  {} {}  {:>5.0} cal | P:{:.0}g C:{:.0}g F:{:.0}g | {} meals",
                day.day_name, day.date, day.calories, day.protein, day.carbs, day.fat, day.meal_count
            );
        }
    }

    let avg = &stats.averages;
    println!();
    println!(
        "Daily average: {} cal | P:{}g C:{}g F:{}g",
        avg.calories, avg.protein, avg.carbs, avg.fat
    );
    println!("Current streak: {} day(s)", stats.streak);
    println!("Meals logged: {}", stats.total_meals);
}

/// Display progress toward each daily goal.
pub fn display_goals(date: &str, progress: &[GoalProgress]) {
    println!();
    println!("--- Goals for {} ---", date);
    for p in progress {
        println!(
            "  {} {:<8} {:>6.0}/{:.0} {} ({:.0}%), {:.0} {} to go",
            goal_marker(p.status),
            p.nutrient,
            p.total,
            p.goal,
            p.unit,
            p.percent,
            p.remaining,
            p.unit
        );
    }
}

/// Display a short list of logged meals.
pub fn display_entries(entries: &[&MealEntry]) {
    if entries.is_empty() {
        return;
    }

    println!();
    println!("--- Recent meals ---");
    for e in entries {
        let meal_type = e.meal_type.as_deref().unwrap_or("meal");
        println!("  {} {:<9} {} ({:.0} cal)", e.date, meal_type, e.food_name, e.calories);
    }
}
