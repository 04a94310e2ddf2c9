//! Streak and status analytics for habits
//!
//! Provides the periodic-status engine:
//! - Period-window arithmetic keyed by periodicity ([`calendar`])
//! - Streak grouping over check-off dates ([`streaks`])
//! - The STREAK / PENDING / BROKEN classifier ([`status`])
//! - Completion rates and cross-habit aggregates ([`completion`])
//!
//! Every function here is a pure computation over an immutable [`crate::Habit`]
//! snapshot. The reference date ("today") is always an explicit parameter;
//! nothing in this module reads the clock, so every result is deterministic
//! and directly testable.

pub mod calendar;
pub mod completion;
pub mod status;
pub mod streaks;

pub use calendar::{elapsed_periods, period_window, PeriodWindow};
pub use completion::{completion_rate, completion_rates};
pub use status::{broken_habits, classify, pending_habits, AttentionEntry};
pub use streaks::{longest_streak, longest_streak_overall, streak_lengths};
