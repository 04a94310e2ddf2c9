//! habitua - CLI habit tracker with streak analytics
//!
//! Tracks habits with daily, weekly, or monthly cadences, records
//! check-offs, and reports streaks, completion rates, and habits that
//! need attention.
//!
//! Uses XDG Base Directory specification for file locations:
//! - Database: $XDG_DATA_HOME/habitua/habits.db (~/.local/share/habitua/habits.db)
//! - Logs: $XDG_STATE_HOME/habitua/habitua.log (~/.local/state/habitua/habitua.log)
//! - Config: $XDG_CONFIG_HOME/habitua/config.toml (~/.config/habitua/config.toml)

mod seed;
mod table;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use habitua_core::analytics::{
    broken_habits, classify, completion_rate, longest_streak, longest_streak_overall,
    pending_habits,
};
use habitua_core::{Config, Database, HabitFilter, HabitTracker, Periodicity};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "habitua")]
#[command(about = "Track habits and analyze streaks")]
#[command(version)]
struct Args {
    /// Database file to use (default: XDG data dir)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new habit
    Create {
        /// Habit name
        name: String,

        /// Description of the habit
        #[arg(long, default_value = "")]
        description: String,

        /// Cadence: daily, weekly, or monthly
        #[arg(long, default_value = "daily")]
        periodicity: String,

        /// Start date (YYYY-MM-DD, default: today)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },

    /// Delete an existing habit and its check-offs
    Delete {
        /// Habit name
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// List habits with their current status
    List {
        /// Only show habits with this periodicity
        #[arg(long)]
        periodicity: Option<Periodicity>,
    },

    /// Check off a habit for a date
    CheckOff {
        /// Habit name
        name: String,

        /// Date to check off (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show streaks and completion rates for all habits
    Streaks {
        /// Only show habits with this periodicity
        #[arg(long)]
        periodicity: Option<Periodicity>,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show broken habits, longest-broken first
    Broken {
        /// Only show habits with this periodicity
        #[arg(long)]
        periodicity: Option<Periodicity>,

        /// Also include habits still pending this period
        #[arg(long)]
        pending: bool,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show detailed statistics for one habit
    Show {
        /// Habit name
        name: String,
    },

    /// Show check-off history for one habit
    History {
        /// Habit name
        name: String,
    },

    /// Populate the database with sample habits
    Seed {
        /// Replace existing habits
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Ensure XDG environment variables are set before using core library
    Config::ensure_xdg_env();

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;

    // Initialize logging
    let _log_guard =
        habitua_core::logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!("habitua starting");

    // CLI flag wins over config, which wins over the XDG default
    let db_path = args.db.clone().unwrap_or_else(|| config.database_path());

    tracing::info!(path = %db_path.display(), "Opening database");

    let db = Database::open(&db_path).context("failed to open database")?;
    db.migrate().context("failed to run database migrations")?;

    let tracker = HabitTracker::new(db);
    let today = Local::now().date_naive();

    match args.command {
        Command::Create {
            name,
            description,
            periodicity,
            start_date,
        } => cmd_create(&tracker, &name, &description, &periodicity, start_date, today),
        Command::Delete { name, force } => cmd_delete(&tracker, &name, force),
        Command::List { periodicity } => cmd_list(&tracker, periodicity, today),
        Command::CheckOff { name, date } => cmd_check_off(&tracker, &name, date, today),
        Command::Streaks {
            periodicity,
            format,
        } => cmd_streaks(&tracker, periodicity, &format, today),
        Command::Broken {
            periodicity,
            pending,
            format,
        } => cmd_broken(&tracker, periodicity, pending, &format, today),
        Command::Show { name } => cmd_show(&tracker, &name, today),
        Command::History { name } => cmd_history(&tracker, &name, today),
        Command::Seed { force } => seed::run(&tracker, &db_path, force, today),
    }
}

fn cmd_create(
    tracker: &HabitTracker,
    name: &str,
    description: &str,
    periodicity: &str,
    start_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<()> {
    let habit = tracker
        .create(name, description, periodicity, start_date, today)
        .context("failed to create habit")?;

    println!("Created habit '{}'", habit.name);
    Ok(())
}

fn cmd_delete(tracker: &HabitTracker, name: &str, force: bool) -> Result<()> {
    // Resolve the habit first so a missing name fails before the prompt
    let habit = tracker.get(name)?;

    if !force {
        print!("Are you sure you want to delete habit '{}'? [y/N] ", habit.name);
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;

        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted deletion of habit '{}'", habit.name);
            return Ok(());
        }
    }

    tracker.delete(name)?;
    println!("Habit '{}' deleted.", habit.name);
    Ok(())
}

fn cmd_list(
    tracker: &HabitTracker,
    periodicity: Option<Periodicity>,
    today: NaiveDate,
) -> Result<()> {
    let habits = tracker.list(&HabitFilter { periodicity })?;
    println!("{}", table::format_habits_table(&habits, today));
    Ok(())
}

fn cmd_check_off(
    tracker: &HabitTracker,
    name: &str,
    date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<()> {
    let date = date.unwrap_or(today);
    tracker.check_off(name, date, today)?;
    println!("Checked off habit {}", name);
    Ok(())
}

fn cmd_streaks(
    tracker: &HabitTracker,
    periodicity: Option<Periodicity>,
    format: &str,
    today: NaiveDate,
) -> Result<()> {
    let habits = tracker.list(&HabitFilter { periodicity })?;

    if format == "json" {
        let (overall_name, overall_len) = longest_streak_overall(&habits);
        let output = serde_json::json!({
            "habits": habits.iter().map(|h| {
                serde_json::json!({
                    "name": h.name,
                    "periodicity": h.periodicity.as_str(),
                    "longest_streak": longest_streak(h),
                    "completion_rate": completion_rate(h, today),
                })
            }).collect::<Vec<_>>(),
            "longest_overall": {
                "habit": overall_name,
                "length": overall_len,
            },
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", table::format_streaks_table(&habits, today));

    let (overall_name, overall_len) = longest_streak_overall(&habits);
    if overall_len > 0 {
        println!();
        println!("Longest streak: {} by '{}'", overall_len, overall_name);
    }

    Ok(())
}

fn cmd_broken(
    tracker: &HabitTracker,
    periodicity: Option<Periodicity>,
    include_pending: bool,
    format: &str,
    today: NaiveDate,
) -> Result<()> {
    let habits = tracker.list(&HabitFilter { periodicity })?;

    let mut entries = broken_habits(&habits, today);
    if include_pending {
        entries.extend(pending_habits(&habits, today));
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if habits.is_empty() {
        println!("No habits found");
        return Ok(());
    }

    if entries.is_empty() {
        println!("No habits need attention! Keep up the good work!");
        return Ok(());
    }

    println!("{}", table::format_attention_table(&entries));
    println!();
    println!("Found {} habit(s) needing attention", entries.len());

    Ok(())
}

fn cmd_show(tracker: &HabitTracker, name: &str, today: NaiveDate) -> Result<()> {
    let habit = tracker.get(name)?;

    let (status, last_check_off) = classify(&habit, today);
    let longest = longest_streak(&habit);
    let days_tracked = habit
        .start_date
        .map(|s| (today - s).num_days())
        .unwrap_or(0);

    let title = format!("Statistics for '{}'", habit.name);
    println!("{}", title);
    println!("{:=<1$}", "", title.len());
    println!();

    println!("Periodicity:      {}", habit.periodicity.display_name());
    println!(
        "Start Date:       {}",
        habit
            .start_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("Days Tracked:     {}", days_tracked);
    println!("Times Completed:  {}", habit.check_off_log.len());
    println!("Longest Streak:   {}", longest);
    println!("Status:           {}", status.display_name());
    if let Some(last) = last_check_off {
        println!("Last Check-off:   {}", last);
    }

    println!();
    println!(
        "Tip: run 'habitua history \"{}\"' to see check-off history.",
        habit.name
    );

    Ok(())
}

fn cmd_history(tracker: &HabitTracker, name: &str, today: NaiveDate) -> Result<()> {
    let habit = tracker.get(name)?;

    if habit.check_off_log.is_empty() {
        println!("No check-offs recorded yet.");
        return Ok(());
    }

    println!("{}", table::format_history_table(&habit.check_off_log, today));
    println!();
    println!("Total check-offs: {}", habit.check_off_log.len());

    Ok(())
}
