use std::fs;
use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bite_balance_rs::cli::{Cli, Command};
use bite_balance_rs::error::{BiteError, Result};
use bite_balance_rs::insights::{build_report_with, MealReport};
use bite_balance_rs::intake::parse_vision_response;
use bite_balance_rs::interface::{
    display_entries, display_goals, display_report, display_stats, prompt_entry_choice,
    prompt_reading,
};
use bite_balance_rs::journal::{load_entries, parse_day, write_daily_scores_csv, Goals, Journal};
use bite_balance_rs::models::NutritionReading;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so `--json` output on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bite_balance_rs=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Analyze { input } => {
            let reading = match input {
                Some(path) => NutritionReading::from_json_str(&fs::read_to_string(path)?)?,
                None => prompt_reading()?,
            };
            let report = build_report_with(&reading, &mut rng);
            emit(&report, cli.json)
        }
        Command::Vision { response } => cmd_vision(&response, &mut rng, cli.json),
        Command::Day { date } => cmd_day(&cli.journal, date, &mut rng, cli.json),
        Command::Meal { name } => cmd_meal(&cli.journal, &name, &mut rng, cli.json),
        Command::Stats {
            days,
            date,
            recent,
            goals,
        } => cmd_stats(&cli.journal, days, date, recent, goals.into(), cli.json),
        Command::Report { csv } => cmd_report(&cli.journal, &csv),
    }
}

fn emit(report: &MealReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        display_report(report);
    }
    Ok(())
}

fn open_journal(path: &Path) -> Result<Journal> {
    if !path.exists() {
        return Err(BiteError::InvalidInput(format!(
            "journal file not found: {}",
            path.display()
        )));
    }

    let journal = Journal::new(load_entries(path)?);
    info!(entries = journal.len(), "journal loaded");
    Ok(journal)
}

/// Score the meal described by a raw vision-model answer.
fn cmd_vision(path: &Path, rng: &mut dyn RngCore, json: bool) -> Result<()> {
    let raw = fs::read_to_string(path)?;
    let vision = parse_vision_response(&raw)?;

    let report = build_report_with(&vision.to_reading(), rng).with_label(vision.display_name());
    emit(&report, json)?;

    if !json {
        if let Some(notes) = &vision.notes {
            println!("Model notes ({} confidence): {}", vision.confidence, notes);
        }
    }
    Ok(())
}

/// Score a day's aggregate intake.
fn cmd_day(journal_path: &Path, date: Option<String>, rng: &mut dyn RngCore, json: bool) -> Result<()> {
    let journal = open_journal(journal_path)?;
    let date = match date {
        Some(d) => d,
        None => journal.latest_date()?.to_string(),
    };

    let meals = journal.entries_on(&date).len();
    if meals == 0 {
        return Err(BiteError::EntryNotFound(format!("no meals logged on {}", date)));
    }

    info!(%date, meals, "analyzing daily totals");
    let totals = journal.daily_totals(&date);
    let report = build_report_with(&totals, rng).with_label(format!("{} ({} meals)", date, meals));
    emit(&report, json)
}

/// Score one logged meal found by name.
fn cmd_meal(journal_path: &Path, name: &str, rng: &mut dyn RngCore, json: bool) -> Result<()> {
    let journal = open_journal(journal_path)?;
    let candidates = journal.find_by_name(name);

    let needle = name.trim().to_lowercase();
    let exact = candidates.iter().all(|e| e.key() == needle);

    // Several exact hits mean the meal was logged more than once: ask which
    // one, or take the most recent when output must stay non-interactive.
    let entry = match candidates.as_slice() {
        [] => return Err(BiteError::EntryNotFound(name.to_string())),
        [only] if exact => *only,
        [best, ..] if json => *best,
        _ => match prompt_entry_choice(&candidates)? {
            Some(entry) => entry,
            None => return Ok(()),
        },
    };

    let report = build_report_with(&entry.reading(), rng)
        .with_label(format!("{} ({})", entry.food_name, entry.date));
    emit(&report, json)
}

/// Window stats, goal progress for the last day, and the newest entries.
fn cmd_stats(
    journal_path: &Path,
    days: usize,
    date: Option<String>,
    recent: usize,
    goals: Goals,
    json: bool,
) -> Result<()> {
    let journal = open_journal(journal_path)?;
    let end = match date {
        Some(d) => parse_day(&d)?,
        None => chrono::Local::now().date_naive(),
    };
    let end_key = end.format("%Y-%m-%d").to_string();

    let stats = journal.stats(end, days);
    let progress = goals.progress(&journal.daily_totals(&end_key));
    let entries = journal.recent_entries(None, recent);
    info!(date = %end_key, days, streak = stats.streak, "journal stats");

    if json {
        let out = serde_json::json!({
            "date": end_key,
            "stats": stats,
            "goals": progress,
            "recentEntries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        display_stats(&stats);
        display_goals(&end_key, &progress);
        display_entries(&entries);
        println!();
    }
    Ok(())
}

/// Export per-day scores to CSV.
fn cmd_report(journal_path: &Path, csv_path: &Path) -> Result<()> {
    let journal = open_journal(journal_path)?;
    let rows = write_daily_scores_csv(&journal, csv_path)?;
    println!("Wrote {} days to {}", rows, csv_path.display());
    Ok(())
}
