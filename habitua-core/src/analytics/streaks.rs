//! Streak grouping over check-off dates
//!
//! A streak is a maximal run of check-off dates where the gap between
//! neighbors never exceeds the periodicity's cadence length. Grouping is
//! purely date-gap based and independent of the status classifier: a habit
//! can be BROKEN today and still own a long historical streak.

use chrono::NaiveDate;

use crate::types::{Habit, Periodicity};

/// Partition check-off dates into maximal consecutive groups and report
/// each group's size, in chronological order.
///
/// Dates are sorted and de-duplicated first; checking off twice on one day
/// never lengthens a streak. Two dates exactly one cadence apart count as
/// consecutive (inclusive bound). Returns `[0]` for an empty log, which
/// callers must read as "no streak", not a meaningful zero-size group.
pub fn streak_lengths(dates: &[NaiveDate], periodicity: Periodicity) -> Vec<usize> {
    if dates.is_empty() {
        return vec![0];
    }

    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let cadence = periodicity.cadence_days();
    let mut lengths = Vec::new();
    let mut current = 1usize;
    for pair in sorted.windows(2) {
        if (pair[1] - pair[0]).num_days() <= cadence {
            current += 1;
        } else {
            lengths.push(current);
            current = 1;
        }
    }
    lengths.push(current);
    lengths
}

/// Longest streak for one habit; 0 when it has no check-offs.
pub fn longest_streak(habit: &Habit) -> usize {
    streak_lengths(&habit.check_off_log, habit.periodicity)
        .into_iter()
        .max()
        .unwrap_or(0)
}

/// The habit with the longest streak across the collection.
///
/// Ties keep the first habit encountered, so the result is deterministic
/// for a given input order. Returns `("", 0)` for an empty collection.
pub fn longest_streak_overall(habits: &[Habit]) -> (String, usize) {
    let mut best: Option<(String, usize)> = None;
    for habit in habits {
        let length = longest_streak(habit);
        let replace = match &best {
            Some((_, best_length)) => length > *best_length,
            None => true,
        };
        if replace {
            best = Some((habit.name.clone(), length));
        }
    }
    best.unwrap_or_else(|| (String::new(), 0))
}
