//! Core domain types for habitua
//!
//! These types form the canonical data model shared by storage, the
//! analytics engine, and the CLI.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Habit** | A recurring activity the user wants to keep up (unique by name) |
//! | **Periodicity** | How often a habit is due: daily, weekly, or monthly |
//! | **CheckOff** | One completion event for a habit on a calendar date |
//! | **HabitStatus** | STREAK / PENDING / BROKEN, recomputed on every query |
//!
//! All dates are naive calendar dates. There is no timezone handling and no
//! time-of-day component anywhere in the model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================
// Periodicity
// ============================================

/// How often a habit is due.
///
/// Each variant carries a fixed cadence length in days, used both for
/// period-window sizing and for streak adjacency. Monthly is a fixed
/// 30-day approximation, not a calendar-month computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Periodicity {
    Daily,
    Weekly,
    Monthly,
}

impl Periodicity {
    /// Cadence length in days (DAILY = 1, WEEKLY = 7, MONTHLY = 30).
    pub fn cadence_days(&self) -> i64 {
        match self {
            Periodicity::Daily => 1,
            Periodicity::Weekly => 7,
            Periodicity::Monthly => 30,
        }
    }

    /// Returns the identifier used in database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
            Periodicity::Monthly => "monthly",
        }
    }

    /// Returns the display name for table rendering
    pub fn display_name(&self) -> &'static str {
        match self {
            Periodicity::Daily => "Daily",
            Periodicity::Weekly => "Weekly",
            Periodicity::Monthly => "Monthly",
        }
    }
}

impl std::fmt::Display for Periodicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Periodicity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" | "Daily" => Ok(Periodicity::Daily),
            "weekly" | "Weekly" => Ok(Periodicity::Weekly),
            "monthly" | "Monthly" => Ok(Periodicity::Monthly),
            _ => Err(format!("unknown periodicity: {}", s)),
        }
    }
}

// ============================================
// Habit Status
// ============================================

/// Current standing of a habit, recomputed from its check-off log on every
/// query. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitStatus {
    /// Checked off within the current period (or not yet due at all)
    Streak,
    /// Current period missed so far, but the previous one was covered
    Pending,
    /// Both the current and previous periods have no check-off
    Broken,
}

impl HabitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitStatus::Streak => "streak",
            HabitStatus::Pending => "pending",
            HabitStatus::Broken => "broken",
        }
    }

    /// Returns the display name for table rendering
    pub fn display_name(&self) -> &'static str {
        match self {
            HabitStatus::Streak => "Streak",
            HabitStatus::Pending => "Pending",
            HabitStatus::Broken => "Broken",
        }
    }
}

impl std::fmt::Display for HabitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================
// Habit
// ============================================

/// A tracked habit together with its full check-off log.
///
/// Storage guarantees the name is unique and `check_off_log` is sorted
/// ascending and complete at read time. Analytics never mutate a `Habit`;
/// every classification is recomputed from this snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Database ID (auto-incremented)
    pub id: i64,
    /// Unique habit name (primary lookup key for the CLI)
    pub name: String,
    /// Free-form description, empty when not provided
    pub description: String,
    /// How often the habit is due
    pub periodicity: Periodicity,
    /// Date tracking began. A habit without a start date is treated as
    /// never started and cannot be broken.
    pub start_date: Option<NaiveDate>,
    /// All recorded check-off dates, ascending. Duplicate dates are
    /// permitted by the model.
    pub check_off_log: Vec<NaiveDate>,
}

impl Habit {
    /// Most recent check-off date, if any.
    pub fn last_check_off(&self) -> Option<NaiveDate> {
        self.check_off_log.iter().max().copied()
    }
}

// ============================================
// Check-off
// ============================================

/// One completion event for a habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOff {
    /// Database ID (auto-incremented)
    pub id: i64,
    /// FK to habits table
    pub habit_id: i64,
    /// Calendar date of the completion
    pub date: NaiveDate,
}
