//! Table rendering for CLI output.

use chrono::NaiveDate;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use habitua_core::analytics::{classify, completion_rate, longest_streak, AttentionEntry};
use habitua_core::format::format_optional_date;
use habitua_core::{Habit, HabitStatus};

fn status_cell(status: HabitStatus) -> Cell {
    let color = match status {
        HabitStatus::Streak => Color::Green,
        HabitStatus::Pending => Color::Yellow,
        HabitStatus::Broken => Color::Red,
    };
    Cell::new(status.display_name()).fg(color)
}

/// Format habits as a table with their current status
pub fn format_habits_table(habits: &[Habit], today: NaiveDate) -> String {
    if habits.is_empty() {
        return "No habits found".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Name").fg(Color::Cyan),
        Cell::new("Description").fg(Color::Cyan),
        Cell::new("Periodicity").fg(Color::Cyan),
        Cell::new("Start Date").fg(Color::Cyan),
        Cell::new("Last Check-off").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
    ]);

    for habit in habits {
        let (status, _) = classify(habit, today);
        let start = habit
            .start_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let last = format_optional_date(habit.last_check_off(), today);

        table.add_row(Row::from(vec![
            Cell::new(&habit.name),
            Cell::new(&habit.description),
            Cell::new(habit.periodicity.display_name()),
            Cell::new(start),
            Cell::new(last),
            status_cell(status),
        ]));
    }

    table.to_string()
}

/// Format per-habit streak lengths and completion rates
pub fn format_streaks_table(habits: &[Habit], today: NaiveDate) -> String {
    if habits.is_empty() {
        return "No habits found".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Habit").fg(Color::Cyan),
        Cell::new("Longest Streak").fg(Color::Cyan),
        Cell::new("Completion Rate").fg(Color::Cyan),
        Cell::new("Periodicity").fg(Color::Cyan),
    ]);

    for habit in habits {
        table.add_row(Row::from(vec![
            Cell::new(&habit.name),
            Cell::new(longest_streak(habit).to_string()),
            Cell::new(format!("{:.1}%", completion_rate(habit, today))),
            Cell::new(habit.periodicity.display_name()),
        ]));
    }

    table.to_string()
}

/// Format habits needing attention, longest-neglected first
pub fn format_attention_table(entries: &[AttentionEntry]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Habit").fg(Color::Cyan),
        Cell::new("Periodicity").fg(Color::Cyan),
        Cell::new("Last Check-off").fg(Color::Cyan),
        Cell::new("Days Since").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
    ]);

    for entry in entries {
        let last = entry
            .last_check_off
            .map(|d| d.to_string())
            .unwrap_or_else(|| "Never".to_string());

        table.add_row(Row::from(vec![
            Cell::new(&entry.name),
            Cell::new(entry.periodicity.display_name()),
            Cell::new(last),
            Cell::new(entry.days_since.to_string()),
            status_cell(entry.status),
        ]));
    }

    table.to_string()
}

/// Format check-off dates as a history table, most recent first
pub fn format_history_table(dates: &[NaiveDate], today: NaiveDate) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Date").fg(Color::Cyan),
        Cell::new("Days Ago").fg(Color::Cyan),
    ]);

    let mut sorted = dates.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));

    for date in sorted {
        table.add_row(Row::from(vec![
            Cell::new(date.to_string()),
            Cell::new(habitua_core::format::format_days_ago(date, today)),
        ]));
    }

    table.to_string()
}
