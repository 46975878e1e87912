use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

use crate::error::{BiteError, Result};
use crate::journal::Journal;
use crate::models::NutritionReading;

/// Window length used when none is given.
pub const DEFAULT_STATS_DAYS: usize = 7;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` journal date.
pub fn parse_day(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| BiteError::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", text)))
}

fn weekday_abbrev(date: &NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// One calendar day inside a stats window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTotals {
    pub date: String,
    pub day_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meal_count: usize,
}

/// Per-day averages, rounded to whole units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Averages {
    pub calories: u64,
    pub protein: u64,
    pub carbs: u64,
    pub fat: u64,
}

/// Aggregate view of the last N days of the journal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalStats {
    /// Oldest day first; empty when the journal has no entries at all.
    pub days: Vec<DayTotals>,
    /// Averaged over days with calories logged only.
    pub averages: Averages,
    /// Consecutive days with a meal, counted back from the window's last day.
    pub streak: usize,
    pub total_meals: usize,
}

impl Journal {
    /// Totals, averages and streak for the `days` days ending on `end`.
    pub fn stats(&self, end: NaiveDate, days: usize) -> JournalStats {
        if self.is_empty() {
            return JournalStats {
                days: Vec::new(),
                averages: Averages::default(),
                streak: 0,
                total_meals: 0,
            };
        }

        let mut by_date: HashMap<&str, (NutritionReading, usize)> = HashMap::new();
        for entry in self.entries() {
            let slot = by_date.entry(entry.date.as_str()).or_default();
            slot.0 = slot.0 + entry.reading();
            slot.1 += 1;
        }

        // Newest first while walking back; reversed at the end.
        let mut window: Vec<DayTotals> = (0..days)
            .map_while(|offset| end.checked_sub_days(Days::new(offset as u64)))
            .map(|date| {
                let key = date.format(DATE_FORMAT).to_string();
                let (totals, meal_count) = by_date.get(key.as_str()).copied().unwrap_or_default();
                let totals = totals.sanitized();
                DayTotals {
                    date: key,
                    day_name: weekday_abbrev(&date).to_string(),
                    calories: totals.calories,
                    protein: totals.protein,
                    carbs: totals.carbs,
                    fat: totals.fats,
                    meal_count,
                }
            })
            .collect();

        let streak = window.iter().take_while(|d| d.meal_count > 0).count();
        let averages = average_days(&window);
        window.reverse();

        debug!(%end, days, streak, "computed journal stats");

        JournalStats {
            days: window,
            averages,
            streak,
            total_meals: self.len(),
        }
    }
}

fn average_days(days: &[DayTotals]) -> Averages {
    let logged: Vec<&DayTotals> = days.iter().filter(|d| d.calories > 0.0).collect();
    if logged.is_empty() {
        return Averages::default();
    }

    let n = logged.len() as f64;
    let mean = |field: fn(&DayTotals) -> f64| {
        (logged.iter().map(|d| field(d)).sum::<f64>() / n).round() as u64
    };

    Averages {
        calories: mean(|d| d.calories),
        protein: mean(|d| d.protein),
        carbs: mean(|d| d.carbs),
        fat: mean(|d| d.fat),
    }
}
