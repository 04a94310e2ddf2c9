//! Period-window arithmetic
//!
//! Maps a periodicity and a reference date onto closed date intervals.
//! Windows are computed backward from the reference date: the offset-0
//! "current" period for weekly and monthly habits is the 7-/30-day interval
//! *ending at* the reference date, not a calendar-aligned week or month.
//! That way a check-off today always counts toward the current period, no
//! matter where in the cadence today falls.

use chrono::{Duration, NaiveDate};

use crate::types::Periodicity;

/// A closed date interval `[start, end]` with `start <= end`.
///
/// Transient value produced by [`period_window`] and consumed immediately;
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    /// Inclusive membership test.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Compute the period window at `offset` periods before the reference date.
///
/// Offset 0 is the current period, 1 the previous one, and so on:
/// - daily: the single day `reference_date - offset` days
/// - weekly: the 7-day window ending at `reference_date - offset * 7` days
/// - monthly: the 30-day window ending at `reference_date - offset * 30` days
///
/// Monthly windows use a fixed 30-day length, not calendar months.
pub fn period_window(
    periodicity: Periodicity,
    reference_date: NaiveDate,
    offset: u32,
) -> PeriodWindow {
    let offset = i64::from(offset);
    match periodicity {
        Periodicity::Daily => {
            let day = reference_date - Duration::days(offset);
            PeriodWindow {
                start: day,
                end: day,
            }
        }
        Periodicity::Weekly => {
            let end = reference_date - Duration::days(offset * 7);
            PeriodWindow {
                start: end - Duration::days(6),
                end,
            }
        }
        Periodicity::Monthly => {
            let end = reference_date - Duration::days(offset * 30);
            PeriodWindow {
                start: end - Duration::days(29),
                end,
            }
        }
    }
}

/// Whole periods elapsed between `start_date` and `reference_date`.
///
/// Days since start for daily habits, whole weeks (days / 7) for weekly,
/// whole 30-day blocks for monthly. Zero on the start date itself; zero or
/// negative when `start_date` lies after `reference_date` (callers treat
/// non-positive counts as "nothing expected yet").
pub fn elapsed_periods(
    start_date: NaiveDate,
    periodicity: Periodicity,
    reference_date: NaiveDate,
) -> i64 {
    let days = (reference_date - start_date).num_days();
    days / periodicity.cadence_days()
}
