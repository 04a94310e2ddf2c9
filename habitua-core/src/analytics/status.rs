//! The STREAK / PENDING / BROKEN classifier
//!
//! Status is a two-window question: did the habit get checked off in the
//! current period, and if not, in the previous one? A current-period
//! check-off always wins, so one completion today clears any earlier lapse
//! from the status (streak-length accounting in [`super::streaks`] is
//! independent and still sees the gap).

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::calendar::period_window;
use crate::types::{Habit, HabitStatus, Periodicity};

/// Classify a habit as of an explicit reference date.
///
/// Returns the status together with the most recent check-off date. A habit
/// that has no start date, or whose start date is today or later, has not
/// begun yet and is vacuously on streak; the last-check-off slot is `None`
/// in that case even if the log is non-empty.
pub fn classify(habit: &Habit, reference_date: NaiveDate) -> (HabitStatus, Option<NaiveDate>) {
    let start = match habit.start_date {
        Some(start) if start < reference_date => start,
        _ => return (HabitStatus::Streak, None),
    };

    let current = period_window(habit.periodicity, reference_date, 0);
    let previous = period_window(habit.periodicity, reference_date, 1);

    if habit.check_off_log.is_empty() {
        // Nothing ever recorded: broken once a full prior period has
        // passed since the start, otherwise still in the first grace
        // period.
        if start <= previous.start {
            return (HabitStatus::Broken, None);
        }
        return (HabitStatus::Pending, None);
    }

    let last = habit.last_check_off();
    let in_current = habit.check_off_log.iter().any(|d| current.contains(*d));

    if start > previous.end {
        // The previous period closed before the habit existed, so it
        // cannot be held against it.
        let status = if in_current {
            HabitStatus::Streak
        } else {
            HabitStatus::Pending
        };
        return (status, last);
    }

    if in_current {
        return (HabitStatus::Streak, last);
    }

    let in_previous = habit.check_off_log.iter().any(|d| previous.contains(*d));
    if in_previous {
        (HabitStatus::Pending, last)
    } else {
        (HabitStatus::Broken, last)
    }
}

/// One row of the "needs attention" report.
#[derive(Debug, Clone, Serialize)]
pub struct AttentionEntry {
    /// Habit name
    pub name: String,
    /// How often the habit is due
    pub periodicity: Periodicity,
    /// Classified status as of the reference date
    pub status: HabitStatus,
    /// Most recent check-off, if any
    pub last_check_off: Option<NaiveDate>,
    /// Days between the reference date and the last check-off (or the
    /// start date when nothing was ever recorded)
    pub days_since: i64,
}

/// All habits currently BROKEN, longest-broken first.
///
/// "Longest broken" is measured from the last check-off, falling back to
/// the start date for habits with an empty log.
pub fn broken_habits(habits: &[Habit], reference_date: NaiveDate) -> Vec<AttentionEntry> {
    habits_with_status(habits, reference_date, HabitStatus::Broken)
}

/// All habits currently PENDING, ordered like [`broken_habits`].
pub fn pending_habits(habits: &[Habit], reference_date: NaiveDate) -> Vec<AttentionEntry> {
    habits_with_status(habits, reference_date, HabitStatus::Pending)
}

fn habits_with_status(
    habits: &[Habit],
    reference_date: NaiveDate,
    wanted: HabitStatus,
) -> Vec<AttentionEntry> {
    let mut entries: Vec<AttentionEntry> = habits
        .iter()
        .filter_map(|habit| {
            let (status, last_check_off) = classify(habit, reference_date);
            if status != wanted {
                return None;
            }
            let anchor = last_check_off
                .or(habit.start_date)
                .unwrap_or(reference_date);
            Some(AttentionEntry {
                name: habit.name.clone(),
                periodicity: habit.periodicity,
                status,
                last_check_off,
                days_since: (reference_date - anchor).num_days(),
            })
        })
        .collect();

    entries.sort_by(|a, b| b.days_since.cmp(&a.days_since));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(
        name: &str,
        periodicity: Periodicity,
        start_date: Option<NaiveDate>,
        log: Vec<NaiveDate>,
    ) -> Habit {
        Habit {
            id: 0,
            name: name.to_string(),
            description: String::new(),
            periodicity,
            start_date,
            check_off_log: log,
        }
    }

    #[test]
    fn test_no_start_date_is_vacuous_streak() {
        let h = habit("new", Periodicity::Daily, None, vec![]);
        assert_eq!(classify(&h, date(2025, 6, 15)), (HabitStatus::Streak, None));
    }

    #[test]
    fn test_started_today_is_streak_without_check_offs() {
        let today = date(2025, 6, 15);
        for p in [Periodicity::Daily, Periodicity::Weekly, Periodicity::Monthly] {
            let h = habit("fresh", p, Some(today), vec![]);
            assert_eq!(classify(&h, today), (HabitStatus::Streak, None));
        }
    }

    #[test]
    fn test_future_start_is_streak_even_with_check_offs() {
        let today = date(2025, 6, 15);
        let h = habit(
            "later",
            Periodicity::Daily,
            Some(date(2025, 7, 1)),
            vec![date(2025, 6, 10)],
        );
        // Not started yet: the log is ignored entirely.
        assert_eq!(classify(&h, today), (HabitStatus::Streak, None));
    }

    #[test]
    fn test_empty_log_within_first_grace_period_is_pending() {
        let today = date(2025, 6, 15);
        // Weekly habit started 5 days ago: previous window [2nd..8th]
        // starts before the habit did, so nothing can be held against it.
        let h = habit("journal", Periodicity::Weekly, Some(date(2025, 6, 10)), vec![]);
        assert_eq!(classify(&h, today), (HabitStatus::Pending, None));
    }

    #[test]
    fn test_empty_log_after_full_prior_period_is_broken() {
        let today = date(2025, 6, 15);
        let h = habit(
            "gym",
            Periodicity::Weekly,
            Some(today - Duration::days(40)),
            vec![],
        );
        assert_eq!(classify(&h, today), (HabitStatus::Broken, None));
    }

    #[test]
    fn test_daily_checked_today_is_streak() {
        let today = date(2025, 6, 15);
        let h = habit(
            "water",
            Periodicity::Daily,
            Some(today - Duration::days(10)),
            vec![today - Duration::days(1), today],
        );
        assert_eq!(classify(&h, today), (HabitStatus::Streak, Some(today)));
    }

    #[test]
    fn test_daily_checked_yesterday_only_is_pending() {
        let today = date(2025, 6, 15);
        let log: Vec<NaiveDate> = (1..=10).map(|n| today - Duration::days(n)).collect();
        let h = habit(
            "run",
            Periodicity::Daily,
            Some(today - Duration::days(10)),
            log,
        );
        let (status, last) = classify(&h, today);
        assert_eq!(status, HabitStatus::Pending);
        assert_eq!(last, Some(today - Duration::days(1)));
    }

    #[test]
    fn test_daily_missed_both_periods_is_broken() {
        let today = date(2025, 6, 15);
        let h = habit(
            "floss",
            Periodicity::Daily,
            Some(today - Duration::days(10)),
            vec![today - Duration::days(5)],
        );
        let (status, last) = classify(&h, today);
        assert_eq!(status, HabitStatus::Broken);
        assert_eq!(last, Some(today - Duration::days(5)));
    }

    #[test]
    fn test_current_check_off_overrides_old_gap() {
        let today = date(2025, 6, 15);
        // Weeks of silence, then a check-off today: status clears.
        let h = habit(
            "review",
            Periodicity::Weekly,
            Some(today - Duration::days(60)),
            vec![today - Duration::days(45), today],
        );
        assert_eq!(classify(&h, today), (HabitStatus::Streak, Some(today)));
    }

    #[test]
    fn test_started_after_previous_period_pending_without_current_check_off() {
        let today = date(2025, 6, 15);
        // Start falls inside the current window; a stray backfilled
        // check-off from before the start must not count as a miss of
        // a period the habit never lived through.
        let h = habit(
            "plan",
            Periodicity::Weekly,
            Some(today - Duration::days(3)),
            vec![today - Duration::days(20)],
        );
        let (status, last) = classify(&h, today);
        assert_eq!(status, HabitStatus::Pending);
        assert_eq!(last, Some(today - Duration::days(20)));
    }

    #[test]
    fn test_started_after_previous_period_streak_with_current_check_off() {
        let today = date(2025, 6, 15);
        let h = habit(
            "plan",
            Periodicity::Weekly,
            Some(today - Duration::days(3)),
            vec![today - Duration::days(2)],
        );
        let (status, last) = classify(&h, today);
        assert_eq!(status, HabitStatus::Streak);
        assert_eq!(last, Some(today - Duration::days(2)));
    }

    #[test]
    fn test_broken_habits_sorted_longest_broken_first() {
        let today = date(2025, 6, 15);
        let recent = habit(
            "recent",
            Periodicity::Daily,
            Some(today - Duration::days(30)),
            vec![today - Duration::days(4)],
        );
        let stale = habit(
            "stale",
            Periodicity::Daily,
            Some(today - Duration::days(30)),
            vec![today - Duration::days(12)],
        );
        let fine = habit(
            "fine",
            Periodicity::Daily,
            Some(today - Duration::days(30)),
            vec![today],
        );

        let broken = broken_habits(&[recent, stale, fine], today);
        assert_eq!(broken.len(), 2);
        assert_eq!(broken[0].name, "stale");
        assert_eq!(broken[0].days_since, 12);
        assert_eq!(broken[1].name, "recent");
        assert_eq!(broken[1].days_since, 4);
    }

    #[test]
    fn test_broken_habit_without_log_anchors_on_start_date() {
        let today = date(2025, 6, 15);
        let h = habit(
            "silent",
            Periodicity::Weekly,
            Some(today - Duration::days(40)),
            vec![],
        );
        let broken = broken_habits(&[h], today);
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].last_check_off, None);
        assert_eq!(broken[0].days_since, 40);
    }

    #[test]
    fn test_empty_collection_yields_empty_reports() {
        let today = date(2025, 6, 15);
        assert!(broken_habits(&[], today).is_empty());
        assert!(pending_habits(&[], today).is_empty());
    }

    #[test]
    fn test_pending_habits_excludes_broken_and_streak() {
        let today = date(2025, 6, 15);
        let pending = habit(
            "pending",
            Periodicity::Daily,
            Some(today - Duration::days(10)),
            vec![today - Duration::days(1)],
        );
        let broken = habit(
            "broken",
            Periodicity::Daily,
            Some(today - Duration::days(10)),
            vec![today - Duration::days(5)],
        );
        let entries = pending_habits(&[pending, broken], today);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "pending");
        assert_eq!(entries[0].status, HabitStatus::Pending);
    }
}
