//! Integration tests for the habitua storage, tracker, and analytics stack
//!
//! These tests drive the full flow (SQLite repository, tracker service,
//! analytics engine) against a temporary database file, always with a fixed
//! reference date so every classification is deterministic.

use chrono::{Duration, NaiveDate};
use habitua_core::analytics::{
    broken_habits, classify, completion_rate, longest_streak, longest_streak_overall,
    pending_habits, streak_lengths,
};
use habitua_core::db::{Database, HabitFilter};
use habitua_core::types::{HabitStatus, Periodicity};
use habitua_core::HabitTracker;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Open a tracker backed by a database file inside the temp dir
fn open_tracker(temp_dir: &TempDir) -> HabitTracker {
    let db_path = temp_dir.path().join("test.db");
    let db = Database::open(&db_path).expect("database should open");
    db.migrate().expect("migrations should run");
    HabitTracker::new(db)
}

// ============================================
// Lifecycle Tests
// ============================================

#[test]
fn test_full_habit_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = open_tracker(&temp_dir);
    let today = date(2025, 6, 15);

    let habit = tracker
        .create("exercise", "Morning run", "daily", None, today)
        .expect("create should succeed");
    assert_eq!(habit.start_date, Some(today));

    tracker
        .check_off("exercise", today, today)
        .expect("check-off should succeed");

    let habit = tracker.get("exercise").expect("get should succeed");
    assert_eq!(habit.check_off_log, vec![today]);
    assert_eq!(classify(&habit, today), (HabitStatus::Streak, Some(today)));

    tracker.delete("exercise").expect("delete should succeed");
    assert!(!tracker.exists("exercise").unwrap());
}

#[test]
fn test_delete_and_recreate_starts_fresh() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = open_tracker(&temp_dir);
    let today = date(2025, 6, 15);

    tracker
        .create("exercise", "", "daily", None, today)
        .unwrap();
    tracker.check_off("exercise", today, today).unwrap();
    tracker
        .check_off("exercise", today - Duration::days(1), today)
        .unwrap();

    tracker.delete("exercise").expect("delete should succeed");

    // Cascade removed the history; a recreated habit must not inherit it
    let habit = tracker
        .create("exercise", "", "weekly", None, today)
        .expect("recreate should succeed");
    assert!(habit.check_off_log.is_empty());

    let habit = tracker.get("exercise").unwrap();
    assert!(habit.check_off_log.is_empty());
    assert_eq!(habit.periodicity, Periodicity::Weekly);
}

#[test]
fn test_database_persists_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let today = date(2025, 6, 15);

    {
        let db = Database::open(&db_path).expect("database should open");
        db.migrate().expect("migrations should run");
        let tracker = HabitTracker::new(db);
        tracker.create("read", "", "daily", None, today).unwrap();
        tracker
            .check_off("read", today - Duration::days(1), today)
            .unwrap();
    }

    let db = Database::open(&db_path).expect("database should reopen");
    db.migrate().expect("migrations should be a no-op");
    let tracker = HabitTracker::new(db);

    let habit = tracker.get("read").expect("habit should survive reopen");
    assert_eq!(habit.check_off_log, vec![today - Duration::days(1)]);
}

// ============================================
// Classifier Scenarios
// ============================================

#[test]
fn test_ten_day_run_ending_yesterday_is_pending() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = open_tracker(&temp_dir);
    let today = date(2025, 6, 15);

    tracker
        .create("run", "", "daily", Some(today - Duration::days(10)), today)
        .unwrap();
    for n in 1..=10 {
        tracker
            .check_off("run", today - Duration::days(n), today)
            .unwrap();
    }

    let habit = tracker.get("run").unwrap();
    let (status, last) = classify(&habit, today);
    assert_eq!(status, HabitStatus::Pending);
    assert_eq!(last, Some(today - Duration::days(1)));
    assert_eq!(longest_streak(&habit), 10);
    assert_eq!(completion_rate(&habit, today), 100.0);
}

#[test]
fn test_missing_day_splits_streak_groups() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = open_tracker(&temp_dir);
    let today = date(2025, 6, 15);

    tracker
        .create("run", "", "daily", Some(today - Duration::days(10)), today)
        .unwrap();
    // Every day except two days ago
    for n in 1..=10 {
        if n == 2 {
            continue;
        }
        tracker
            .check_off("run", today - Duration::days(n), today)
            .unwrap();
    }

    let habit = tracker.get("run").unwrap();
    assert_eq!(
        streak_lengths(&habit.check_off_log, Periodicity::Daily),
        vec![8, 1]
    );
    assert_eq!(longest_streak(&habit), 8);

    // Yesterday is still covered, so status is unaffected by the gap
    let (status, _) = classify(&habit, today);
    assert_eq!(status, HabitStatus::Pending);
}

#[test]
fn test_weekly_habit_never_checked_is_broken() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = open_tracker(&temp_dir);
    let today = date(2025, 6, 15);

    tracker
        .create(
            "review",
            "",
            "weekly",
            Some(today - Duration::days(40)),
            today,
        )
        .unwrap();

    let habit = tracker.get("review").unwrap();
    assert_eq!(classify(&habit, today), (HabitStatus::Broken, None));

    let broken = broken_habits(&[habit], today);
    assert_eq!(broken.len(), 1);
    assert_eq!(broken[0].name, "review");
    assert_eq!(broken[0].days_since, 40);
    assert_eq!(broken[0].last_check_off, None);
}

// ============================================
// Metrics Across Habits
// ============================================

#[test]
fn test_aggregated_metrics_over_mixed_habits() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = open_tracker(&temp_dir);
    let today = date(2025, 6, 15);

    // Daily, checked every day up to yesterday: pending, streak 10
    tracker
        .create("exercise", "", "daily", Some(today - Duration::days(10)), today)
        .unwrap();
    for n in 1..=10 {
        tracker
            .check_off("exercise", today - Duration::days(n), today)
            .unwrap();
    }

    // Daily, abandoned a week ago: broken, streak 7
    tracker
        .create("read", "", "daily", Some(today - Duration::days(20)), today)
        .unwrap();
    for n in 14..=20 {
        tracker
            .check_off("read", today - Duration::days(n), today)
            .unwrap();
    }

    // Weekly, three on-cadence check-offs then silence: broken, streak 3
    tracker
        .create("review", "", "weekly", Some(today - Duration::days(56)), today)
        .unwrap();
    for n in [49, 42, 35] {
        tracker
            .check_off("review", today - Duration::days(n), today)
            .unwrap();
    }

    // Same score as exercise; list order is alphabetical, so the
    // first-encountered habit wins the tie
    tracker
        .create("water", "", "daily", Some(today - Duration::days(10)), today)
        .unwrap();
    for n in 1..=10 {
        tracker
            .check_off("water", today - Duration::days(n), today)
            .unwrap();
    }

    let habits = tracker.list(&HabitFilter::default()).unwrap();
    assert_eq!(habits.len(), 4);

    let (name, length) = longest_streak_overall(&habits);
    assert_eq!(name, "exercise");
    assert_eq!(length, 10);

    let broken = broken_habits(&habits, today);
    let names: Vec<&str> = broken.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["review", "read"]);
    assert_eq!(broken[0].days_since, 35);
    assert_eq!(broken[1].days_since, 14);

    let pending = pending_habits(&habits, today);
    let names: Vec<&str> = pending.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["exercise", "water"]);
}

#[test]
fn test_duplicate_check_offs_inflate_completion_not_streaks() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = open_tracker(&temp_dir);
    let today = date(2025, 6, 15);

    tracker
        .create("water", "", "daily", Some(today - Duration::days(2)), today)
        .unwrap();
    for _ in 0..3 {
        tracker
            .check_off("water", today - Duration::days(1), today)
            .unwrap();
    }

    let habit = tracker.get("water").unwrap();

    // Three events on one date are one streak day but three counted
    // completions
    assert_eq!(
        streak_lengths(&habit.check_off_log, Periodicity::Daily),
        vec![1]
    );
    assert_eq!(completion_rate(&habit, today), 150.0);
}

#[test]
fn test_empty_database_yields_vacuous_metrics() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = open_tracker(&temp_dir);
    let today = date(2025, 6, 15);

    let habits = tracker.list(&HabitFilter::default()).unwrap();
    assert!(habits.is_empty());

    assert_eq!(longest_streak_overall(&habits), (String::new(), 0));
    assert!(broken_habits(&habits, today).is_empty());
    assert!(pending_habits(&habits, today).is_empty());
}
