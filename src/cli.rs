use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::journal::{
    Goals, DEFAULT_CALORIE_GOAL, DEFAULT_CARBS_GOAL_G, DEFAULT_FAT_GOAL_G, DEFAULT_PROTEIN_GOAL_G,
    DEFAULT_STATS_DAYS,
};

/// BiteBalance: score meals, explain the score, and suggest healthier swaps.
#[derive(Parser, Debug)]
#[command(name = "bite_balance")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal journal JSON file.
    #[arg(
        short,
        long,
        global = true,
        env = "BITE_BALANCE_JOURNAL",
        default_value = "meal_journal.json"
    )]
    pub journal: PathBuf,

    /// Print reports as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Seed for the educational fact picker.
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a single reading from a JSON file, or enter it interactively.
    Analyze {
        /// JSON file holding one nutrition reading.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Analyze a raw vision-model response.
    Vision {
        /// File containing the model's text answer.
        response: PathBuf,
    },

    /// Analyze the day's total from the journal.
    Day {
        /// Day to analyze (YYYY-MM-DD); defaults to the latest logged day.
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Look up a logged meal by name and analyze it.
    Meal {
        /// Food name (fuzzy matched).
        name: String,
    },

    /// Summarize recent days: totals, averages, streak and goal progress.
    Stats {
        /// Number of days in the window.
        #[arg(short = 'n', long, default_value_t = DEFAULT_STATS_DAYS)]
        days: usize,

        /// Last day of the window (YYYY-MM-DD); defaults to today.
        #[arg(short, long)]
        date: Option<String>,

        /// How many of the newest entries to list.
        #[arg(long, default_value_t = 5)]
        recent: usize,

        #[command(flatten)]
        goals: GoalArgs,
    },

    /// Export per-day scores to CSV.
    Report {
        /// Output CSV path.
        #[arg(long, default_value = "daily_scores.csv")]
        csv: PathBuf,
    },
}

/// Daily targets the `stats` command measures progress against.
#[derive(Args, Debug, Clone, Copy)]
pub struct GoalArgs {
    /// Daily calorie goal.
    #[arg(long = "goal-calories", default_value_t = DEFAULT_CALORIE_GOAL)]
    pub calories: f64,

    /// Daily protein goal, grams.
    #[arg(long = "goal-protein", default_value_t = DEFAULT_PROTEIN_GOAL_G)]
    pub protein: f64,

    /// Daily carbohydrate goal, grams.
    #[arg(long = "goal-carbs", default_value_t = DEFAULT_CARBS_GOAL_G)]
    pub carbs: f64,

    /// Daily fat goal, grams.
    #[arg(long = "goal-fat", default_value_t = DEFAULT_FAT_GOAL_G)]
    pub fat: f64,
}

impl From<GoalArgs> for Goals {
    fn from(args: GoalArgs) -> Self {
        Goals {
            calories: args.calories,
            protein: args.protein,
            carbs: args.carbs,
            fat: args.fat,
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Day { date: None }
    }
}
