use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::insights::analyze;
use crate::journal::Journal;

/// One line of the per-day score export.
#[derive(Debug, Clone, Serialize)]
pub struct DailyScoreRow {
    pub date: String,
    pub meals: usize,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub sugars: f64,
    pub sodium: f64,
    pub health_score: i32,
    pub health_grade: String,
    pub concerns: String,
}

/// Score every day in the journal, oldest first.
pub fn daily_score_rows(journal: &Journal) -> Vec<DailyScoreRow> {
    journal
        .dates()
        .into_iter()
        .map(|date| {
            let totals = journal.daily_totals(date);
            let analysis = analyze(&totals);
            let concerns: Vec<&str> = analysis.concerns.iter().map(|c| c.label()).collect();

            DailyScoreRow {
                date: date.to_string(),
                meals: journal.entries_on(date).len(),
                calories: totals.calories,
                protein: totals.protein,
                carbs: totals.carbs,
                fats: totals.fats,
                sugars: totals.sugars,
                sodium: totals.sodium,
                health_score: analysis.health_score,
                health_grade: analysis.health_grade.to_string(),
                concerns: concerns.join("; "),
            }
        })
        .collect()
}

/// Write per-day scores as CSV to any writer.
pub fn write_daily_scores<W: io::Write>(journal: &Journal, writer: W) -> Result<usize> {
    let rows = daily_score_rows(journal);
    let mut wtr = csv::Writer::from_writer(writer);
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(rows.len())
}

/// Write per-day scores to a CSV file; returns the number of rows.
pub fn write_daily_scores_csv(journal: &Journal, path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)?;
    write_daily_scores(journal, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealEntry;

    #[test]
    fn test_csv_output() {
        let journal = Journal::new(vec![
            MealEntry {
                date: "2025-03-01".to_string(),
                food_name: "Ramen".to_string(),
                calories: 650.0,
                protein: 20.0,
                sodium: 1800.0,
                ..Default::default()
            },
            MealEntry {
                date: "2025-03-02".to_string(),
                food_name: "Salad".to_string(),
                calories: 250.0,
                protein: 8.0,
                sodium: 90.0,
                ..Default::default()
            },
        ]);

        let mut buf = Vec::new();
        let rows = write_daily_scores(&journal, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(rows, 2);
        assert_eq!(
            lines[0],
            "date,meals,calories,protein,carbs,fats,sugars,sodium,health_score,health_grade,concerns"
        );
        assert!(lines[1].starts_with("2025-03-01,1,650.0,"));
        assert!(lines[1].ends_with(",70,C,High Sodium; Very High Calories"));
        assert!(lines[2].ends_with(",100,A,"));
    }
}
