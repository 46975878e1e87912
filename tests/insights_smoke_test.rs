use std::collections::HashSet;
use std::io::Write;
use std::thread;

use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

use bite_balance_rs::insights::constants::{
    FACT_HIGH_PROTEIN, FACT_HIGH_SODIUM, FACT_LOW_SUGAR, GENERIC_FACTS,
};
use bite_balance_rs::insights::{
    analyze, build_report, build_report_with, select_facts, select_facts_with,
    suggest_alternatives,
};
use bite_balance_rs::intake::parse_vision_response;
use bite_balance_rs::journal::{load_entries, parse_day, GoalStatus, Goals, Journal};
use bite_balance_rs::models::{HealthGrade, NutritionReading};

const JOURNAL_JSON: &str = r#"{
    "userId": "demo",
    "entries": [
        {"id": "e1", "date": "2025-04-01", "mealType": "breakfast", "foodName": "Oatmeal",
         "calories": 300, "protein": 10, "carbs": 54, "fat": 6.1, "sugar": 1, "sodium": 100},
        {"id": "e2", "date": "2025-04-01", "mealType": "lunch", "foodName": "Sandwich",
         "calories": 450, "protein": 20, "carbs": 45, "fat": 18.2, "sugar": 6, "sodium": 800},
        {"id": "e3", "date": "2025-04-02", "mealType": "snack", "foodName": "Apple",
         "calories": 95, "protein": 0, "carbs": 25, "fat": 0, "sugar": 19, "sodium": 2}
    ],
    "dailySummaries": []
}"#;

fn write_journal() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(JOURNAL_JSON.as_bytes()).unwrap();
    file
}

#[test]
fn test_balanced_meal_needs_no_alternatives() {
    let reading = NutritionReading {
        protein: 20.0,
        sodium: 100.0,
        sugars: 5.0,
        calories: 300.0,
        ..Default::default()
    };
    let analysis = analyze(&reading);

    assert!(analysis.concerns.is_empty());
    assert!(suggest_alternatives(&reading, &analysis).is_empty());
}

#[test]
fn test_protein_boost_comes_last() {
    let reading = NutritionReading::new(650.0, 3.0, 90.0, 25.0, 10.0, 700.0);
    let analysis = analyze(&reading);
    let categories: Vec<String> = suggest_alternatives(&reading, &analysis)
        .into_iter()
        .map(|g| g.category)
        .collect();

    assert_eq!(
        categories,
        vec!["Low Sodium", "Lower Sugar", "Calorie Conscious", "Protein Boost"]
    );
}

#[test]
fn test_relevant_facts_prefix() {
    let reading = NutritionReading {
        protein: 30.0,
        sodium: 900.0,
        sugars: 25.0,
        ..Default::default()
    };

    for _ in 0..20 {
        let facts = select_facts(&reading);
        assert_eq!(facts.len(), 3);
        assert_eq!(facts[0], FACT_HIGH_PROTEIN);
        assert_eq!(facts[1], FACT_HIGH_SODIUM);
        assert!(GENERIC_FACTS.contains(&facts[2].as_str()));
    }
}

#[test]
fn test_facts_at_thresholds_are_generic() {
    let reading = NutritionReading {
        protein: 15.0,
        sodium: 400.0,
        sugars: 10.0,
        ..Default::default()
    };

    let mut rng = StdRng::seed_from_u64(11);
    let facts = select_facts_with(&reading, &mut rng);
    assert_eq!(facts.len(), 3);
    for fact in &facts {
        assert!(GENERIC_FACTS.contains(&fact.as_str()), "unexpected fact {}", fact);
        assert_ne!(fact, FACT_HIGH_PROTEIN);
        assert_ne!(fact, FACT_HIGH_SODIUM);
        assert_ne!(fact, FACT_LOW_SUGAR);
    }

    let sweet_enough = NutritionReading {
        sugars: 9.9,
        ..reading
    };
    let facts = select_facts_with(&sweet_enough, &mut rng);
    assert_eq!(facts[0], FACT_LOW_SUGAR);
}

#[test]
fn test_facts_always_three_distinct() {
    let readings = [
        NutritionReading::zero(),
        NutritionReading::new(500.0, 30.0, 10.0, 40.0, 10.0, 50.0),
        NutritionReading::new(200.0, 8.0, 10.0, 12.0, 3.0, 300.0),
    ];

    for (seed, reading) in readings.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let facts = select_facts_with(reading, &mut rng);
        let unique: HashSet<&String> = facts.iter().collect();
        assert_eq!(facts.len(), 3);
        assert_eq!(unique.len(), 3);
    }
}

#[test]
fn test_reports_identical_except_facts() {
    let reading = NutritionReading::new(520.0, 14.0, 60.0, 18.0, 16.0, 450.0);
    let a = build_report(&reading);
    let b = build_report(&reading);

    assert_eq!(a.analysis, b.analysis);
    assert_eq!(a.alternatives, b.alternatives);
    assert_eq!(a.facts.len(), 3);
    assert_eq!(b.facts.len(), 3);
}

#[test]
fn test_concurrent_analysis() {
    let reading = NutritionReading::new(700.0, 20.0, 40.0, 20.0, 20.0, 500.0);
    let expected = analyze(&reading);

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(move || analyze(&reading)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_journal_daily_totals() {
    let file = write_journal();
    let journal = Journal::new(load_entries(file.path()).unwrap());

    assert_eq!(journal.len(), 3);
    assert_eq!(journal.latest_date().unwrap(), "2025-04-02");

    let totals = journal.daily_totals("2025-04-01");
    assert_float_absolute_eq!(totals.calories, 750.0, 1e-9);
    assert_float_absolute_eq!(totals.fats, 24.3, 1e-9);
    assert_float_absolute_eq!(totals.sugars, 7.0, 1e-9);
    assert_float_absolute_eq!(totals.sodium, 900.0, 1e-9);

    let analysis = analyze(&totals);
    // sodium -20, calories -10
    assert_eq!(analysis.health_score, 70);
    assert_eq!(analysis.health_grade, HealthGrade::C);
}

#[test]
fn test_journal_stats_and_goals() {
    let file = write_journal();
    let journal = Journal::new(load_entries(file.path()).unwrap());

    let stats = journal.stats(parse_day("2025-04-03").unwrap(), 4);
    let dates: Vec<&str> = stats.days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-03-31", "2025-04-01", "2025-04-02", "2025-04-03"]);
    // 2025-04-03 is empty, so the streak is already broken
    assert_eq!(stats.streak, 0);
    // (750 + 95) / 2
    assert_eq!(stats.averages.calories, 423);
    assert_eq!(stats.total_meals, 3);

    let stats = journal.stats(parse_day("2025-04-02").unwrap(), 4);
    assert_eq!(stats.streak, 2);

    let progress = Goals::default().progress(&journal.daily_totals("2025-04-01"));
    assert_float_absolute_eq!(progress[0].remaining, 1250.0, 1e-9);
    assert_float_absolute_eq!(progress[0].percent, 37.5, 1e-9);
    assert_eq!(progress[0].status, GoalStatus::Behind);
}

#[test]
fn test_vision_to_report() {
    let raw = r#"Sure! {"foodName": "Glazed Donut", "estimatedCalories": 260, "protein": 3,
        "carbs": 31, "fat": 14, "fiber": 1, "sugar": 15.5, "sodium": 210, "confidence": "high",
        "notes": "One medium donut"}"#;

    let vision = parse_vision_response(raw).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let report = build_report_with(&vision.to_reading(), &mut rng).with_label(vision.display_name());

    assert_eq!(report.label.as_deref(), Some("Glazed Donut"));
    assert_eq!(report.reading.sugars, 15.5);
    // sugar -15
    assert_eq!(report.analysis.health_score, 85);
    let categories: Vec<&str> = report
        .alternatives
        .iter()
        .map(|g| g.category.as_str())
        .collect();
    assert_eq!(categories, vec!["Lower Sugar", "Protein Boost"]);
}
