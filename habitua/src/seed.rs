//! Sample data seeding for demos and manual testing.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use habitua_core::{HabitFilter, HabitTracker, Periodicity};
use rand::Rng;
use std::path::Path;

struct SampleHabit {
    name: &'static str,
    description: &'static str,
    periodicity: Periodicity,
    days_back: i64,
}

const SAMPLE_HABITS: &[SampleHabit] = &[
    SampleHabit {
        name: "Morning Exercise",
        description: "30 minutes of morning workout",
        periodicity: Periodicity::Daily,
        days_back: 30,
    },
    SampleHabit {
        name: "Read Book",
        description: "Read at least 30 minutes",
        periodicity: Periodicity::Daily,
        days_back: 20,
    },
    SampleHabit {
        name: "Weekly Review",
        description: "Review goals and plan next week",
        periodicity: Periodicity::Weekly,
        days_back: 56,
    },
    SampleHabit {
        name: "Deep Clean",
        description: "Deep clean the apartment",
        periodicity: Periodicity::Monthly,
        days_back: 90,
    },
    SampleHabit {
        name: "Budget Review",
        description: "Review and adjust monthly budget",
        periodicity: Periodicity::Monthly,
        days_back: 60,
    },
];

pub fn run(tracker: &HabitTracker, db_path: &Path, force: bool, today: NaiveDate) -> Result<()> {
    if tracker.count()? > 0 {
        if !force {
            println!("Database already contains habits. Use --force to override.");
            return Ok(());
        }

        for habit in tracker.list(&HabitFilter::default())? {
            tracker.delete(&habit.name)?;
        }
    }

    println!(
        "Initializing database '{}' with sample habits...",
        db_path.display()
    );

    let mut rng = rand::thread_rng();

    for sample in SAMPLE_HABITS {
        let start = today - Duration::days(sample.days_back);
        tracker.create(
            sample.name,
            sample.description,
            sample.periodicity.as_str(),
            Some(start),
            today,
        )?;
        println!(
            "Created habit: {} ({})",
            sample.name,
            sample.periodicity.display_name()
        );

        // 70% chance to check off each period
        let mut current = start;
        while current <= today {
            if rng.gen_range(1..=10) <= 7 {
                tracker.check_off(sample.name, current, today)?;
            }
            current += Duration::days(sample.periodicity.cadence_days());
        }
        println!("Added sample check-offs for: {}", sample.name);
    }

    println!();
    println!("Sample data initialization complete!");
    println!("Run 'habitua list' to see the created habits.");

    Ok(())
}
