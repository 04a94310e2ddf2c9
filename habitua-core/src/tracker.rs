//! Habit lifecycle service
//!
//! Validation and delegation between the CLI and the repository. Name and
//! periodicity checks happen here, at the boundary, so the analytics layer
//! only ever sees well-formed habits. "Today" is always an explicit
//! parameter; this module never reads the clock.

use chrono::NaiveDate;

use crate::db::{Database, HabitFilter};
use crate::error::{Error, Result};
use crate::types::{CheckOff, Habit, Periodicity};

/// Service wrapping a [`Database`] with habit lifecycle operations.
pub struct HabitTracker {
    db: Database,
}

impl HabitTracker {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create a new habit.
    ///
    /// The name is trimmed and must be non-empty and unique. The
    /// periodicity string is parsed here so an invalid value fails before
    /// anything is written. A missing start date defaults to `today`.
    pub fn create(
        &self,
        name: &str,
        description: &str,
        periodicity: &str,
        start_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidHabit("habit name must not be empty".into()));
        }

        let periodicity: Periodicity = periodicity.parse().map_err(Error::InvalidHabit)?;

        if self.db.habit_exists(name)? {
            return Err(Error::HabitExists(name.to_string()));
        }

        let start_date = start_date.unwrap_or(today);
        let id = self
            .db
            .insert_habit(name, description, periodicity, Some(start_date))?;

        tracing::info!(habit = name, %periodicity, %start_date, "Created habit");

        Ok(Habit {
            id,
            name: name.to_string(),
            description: description.to_string(),
            periodicity,
            start_date: Some(start_date),
            check_off_log: Vec::new(),
        })
    }

    /// Record a completion for the named habit.
    ///
    /// Dates after `today` are rejected. Checking off the same date twice
    /// is allowed; the model is a log of events, not a set.
    pub fn check_off(&self, name: &str, date: NaiveDate, today: NaiveDate) -> Result<CheckOff> {
        if date > today {
            return Err(Error::FutureCheckOff { date, today });
        }

        let habit = self
            .db
            .get_habit(name)?
            .ok_or_else(|| Error::HabitNotFound(name.to_string()))?;

        let check_off = self.db.insert_check_off(habit.id, date)?;
        tracing::info!(habit = name, %date, "Checked off habit");
        Ok(check_off)
    }

    /// Delete the named habit and its check-off history.
    pub fn delete(&self, name: &str) -> Result<()> {
        if !self.db.delete_habit(name)? {
            return Err(Error::HabitNotFound(name.to_string()));
        }
        tracing::info!(habit = name, "Deleted habit");
        Ok(())
    }

    /// Fetch a habit by name, check-off log attached.
    pub fn get(&self, name: &str) -> Result<Habit> {
        self.db
            .get_habit(name)?
            .ok_or_else(|| Error::HabitNotFound(name.to_string()))
    }

    /// List habits, check-off logs attached.
    pub fn list(&self, filter: &HabitFilter) -> Result<Vec<Habit>> {
        self.db.list_habits(filter)
    }

    /// Whether a habit with this name exists.
    pub fn exists(&self, name: &str) -> Result<bool> {
        self.db.habit_exists(name)
    }

    /// Total number of tracked habits.
    pub fn count(&self) -> Result<i64> {
        self.db.count_habits()
    }
}
