use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use strsim::jaro_winkler;

use crate::error::{BiteError, Result};
use crate::models::{MealEntry, NutritionReading};

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Entries listed when no limit is given.
pub const DEFAULT_ENTRY_LIMIT: usize = 50;

fn logged_at(entry: &MealEntry) -> Option<DateTime<FixedOffset>> {
    entry
        .created_at
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
}

/// Read-only index over logged meals.
pub struct Journal {
    entries: Vec<MealEntry>,
}

impl Journal {
    pub fn new(entries: Vec<MealEntry>) -> Self {
        Self { entries }
    }

    /// All entries, in load order.
    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    /// Entries logged on `date`.
    pub fn entries_on(&self, date: &str) -> Vec<&MealEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Distinct dates, ascending.
    pub fn dates(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.date.is_empty())
            .map(|e| e.date.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Most recent date with at least one entry.
    pub fn latest_date(&self) -> Result<&str> {
        self.dates().pop().ok_or(BiteError::EmptyJournal)
    }

    /// Field-wise sum of every meal on `date`; zero when nothing was logged.
    pub fn daily_totals(&self, date: &str) -> NutritionReading {
        self.entries_on(date).into_iter().map(MealEntry::reading).sum()
    }

    /// Entries whose food name matches `query`.
    ///
    /// Case-insensitive exact matches win outright, most recent first (by date,
    /// then `createdAt`); otherwise entries scoring above
    /// [`FUZZY_MATCH_THRESHOLD`] are returned, best first.
    pub fn find_by_name(&self, query: &str) -> Vec<&MealEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut exact: Vec<&MealEntry> = self.entries.iter().filter(|e| e.key() == needle).collect();
        if !exact.is_empty() {
            exact.sort_by(|a, b| {
                b.date
                    .cmp(&a.date)
                    .then_with(|| b.created_at.cmp(&a.created_at))
            });
            return exact;
        }

        let mut candidates: Vec<(&MealEntry, f64)> = self
            .entries
            .iter()
            .map(|e| (e, jaro_winkler(&e.key(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(e, _)| e).collect()
    }

    /// Newest entries first (by `createdAt`), optionally only those on `date`.
    ///
    /// Entries without a parsable timestamp sort last, in load order.
    pub fn recent_entries(&self, date: Option<&str>, limit: usize) -> Vec<&MealEntry> {
        let mut entries: Vec<&MealEntry> = match date {
            Some(d) => self.entries_on(d),
            None => self.entries.iter().collect(),
        };
        entries.sort_by_key(|e| std::cmp::Reverse(logged_at(e)));
        entries.truncate(limit);
        entries
    }

    /// Count of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, name: &str, calories: f64, sodium: f64) -> MealEntry {
        MealEntry {
            date: date.to_string(),
            food_name: name.to_string(),
            calories,
            protein: 10.0,
            sodium,
            ..Default::default()
        }
    }

    fn sample_journal() -> Journal {
        Journal::new(vec![
            entry("2025-03-02", "Chicken Salad", 400.0, 300.0),
            entry("2025-03-01", "Oatmeal", 300.0, 100.0),
            entry("2025-03-02", "Pasta", 550.0, 600.0),
        ])
    }

    #[test]
    fn test_dates_sorted_and_latest() {
        let journal = sample_journal();
        assert_eq!(journal.dates(), vec!["2025-03-01", "2025-03-02"]);
        assert_eq!(journal.latest_date().unwrap(), "2025-03-02");
    }

    #[test]
    fn test_daily_totals() {
        let journal = sample_journal();
        let totals = journal.daily_totals("2025-03-02");
        assert_eq!(totals.calories, 950.0);
        assert_eq!(totals.protein, 20.0);
        assert_eq!(totals.sodium, 900.0);

        assert_eq!(journal.daily_totals("1999-01-01"), NutritionReading::zero());
    }

    #[test]
    fn test_find_by_name() {
        let journal = sample_journal();
        assert_eq!(journal.find_by_name("pasta")[0].food_name, "Pasta");
        assert_eq!(journal.find_by_name("chiken salad")[0].food_name, "Chicken Salad");
        assert!(journal.find_by_name("zzzz").is_empty());
        assert!(journal.find_by_name("  ").is_empty());
    }

    #[test]
    fn test_repeated_meal_latest_first() {
        let journal = Journal::new(vec![
            entry("2025-01-01", "Oatmeal", 300.0, 100.0),
            entry("2025-01-03", "oatmeal", 320.0, 110.0),
            entry("2025-01-02", "Oatmeal", 310.0, 105.0),
        ]);

        let dates: Vec<&str> = journal
            .find_by_name("OATMEAL")
            .iter()
            .map(|e| e.date.as_str())
            .collect();
        assert_eq!(dates, vec!["2025-01-03", "2025-01-02", "2025-01-01"]);
    }

    #[test]
    fn test_recent_entries_newest_first() {
        let stamped = |date: &str, name: &str, at: Option<&str>| MealEntry {
            created_at: at.map(str::to_string),
            ..entry(date, name, 100.0, 100.0)
        };
        let journal = Journal::new(vec![
            stamped("2025-03-01", "Toast", Some("2025-03-01T08:00:00.000Z")),
            stamped("2025-03-01", "Soup", None),
            stamped("2025-03-02", "Salad", Some("2025-03-02T12:30:00Z")),
            stamped("2025-03-01", "Curry", Some("2025-03-01T19:45:00+02:00")),
        ]);

        let names = |list: Vec<&MealEntry>| -> Vec<String> {
            list.into_iter().map(|e| e.food_name.clone()).collect()
        };

        assert_eq!(
            names(journal.recent_entries(None, DEFAULT_ENTRY_LIMIT)),
            vec!["Salad", "Curry", "Toast", "Soup"]
        );
        assert_eq!(names(journal.recent_entries(None, 2)), vec!["Salad", "Curry"]);
        assert_eq!(
            names(journal.recent_entries(Some("2025-03-01"), 10)),
            vec!["Curry", "Toast", "Soup"]
        );
        assert!(journal.recent_entries(Some("2025-03-05"), 10).is_empty());
    }

    #[test]
    fn test_empty_journal() {
        let journal = Journal::new(Vec::new());
        assert!(journal.is_empty());
        assert!(matches!(journal.latest_date(), Err(BiteError::EmptyJournal)));
    }
}
