//! Completion-rate metrics
//!
//! The rate is raw check-off count over whole periods elapsed since the
//! start date. The count is the log length as recorded, duplicates and
//! all, so a habit checked off twice in one period can score above 100%.
//! Streak grouping de-duplicates; this metric deliberately does not.

use chrono::NaiveDate;

use crate::analytics::calendar::elapsed_periods;
use crate::types::Habit;

/// Percentage of expected periods that have a check-off, as of an
/// explicit reference date.
///
/// A habit with no start date has nothing to rate and scores 0.0. A habit
/// with zero (or negative) elapsed periods is vacuously fully compliant
/// and scores 100.0. The result is not capped at 100.
pub fn completion_rate(habit: &Habit, reference_date: NaiveDate) -> f64 {
    let start = match habit.start_date {
        Some(start) => start,
        None => return 0.0,
    };

    let expected = elapsed_periods(start, habit.periodicity, reference_date);
    if expected <= 0 {
        return 100.0;
    }

    habit.check_off_log.len() as f64 / expected as f64 * 100.0
}

/// Per-habit completion rates, in input order.
pub fn completion_rates(habits: &[Habit], reference_date: NaiveDate) -> Vec<(String, f64)> {
    habits
        .iter()
        .map(|habit| (habit.name.clone(), completion_rate(habit, reference_date)))
        .collect()
}
