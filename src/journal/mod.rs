mod book;
mod export;
mod goals;
mod persistence;
mod stats;

pub use book::{Journal, DEFAULT_ENTRY_LIMIT, FUZZY_MATCH_THRESHOLD};
pub use export::{daily_score_rows, write_daily_scores, write_daily_scores_csv, DailyScoreRow};
pub use goals::{
    GoalProgress, GoalStatus, Goals, CLOSE_TO_GOAL_PERCENT, DEFAULT_CALORIE_GOAL,
    DEFAULT_CARBS_GOAL_G, DEFAULT_FAT_GOAL_G, DEFAULT_PROTEIN_GOAL_G,
};
pub use persistence::{load_entries, parse_entries};
pub use stats::{parse_day, Averages, DayTotals, JournalStats, DEFAULT_STATS_DAYS};
