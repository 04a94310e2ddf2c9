//! # habitua-core
//!
//! Core library for habitua - a periodic habit tracker.
//!
//! This library provides:
//! - Domain types for habits and check-offs
//! - Streak and completion analytics over backward-looking period windows
//! - Database storage layer with SQLite
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! The analytics engine is a set of pure functions over immutable `Habit`
//! snapshots: the repository hydrates a habit with its full check-off log,
//! and classification/metrics are recomputed per query from an explicit
//! reference date. Nothing derived is ever persisted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use habitua_core::{Config, Database, HabitTracker};
//!
//! // Load configuration
//! let config = Config::load().expect("failed to load config");
//!
//! // Open database
//! let db = Database::open(&config.database_path()).expect("failed to open database");
//! db.migrate().expect("failed to run migrations");
//!
//! let tracker = HabitTracker::new(db);
//! let today = chrono::Local::now().date_naive();
//! tracker
//!     .create("exercise", "Morning run", "daily", None, today)
//!     .expect("failed to create habit");
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use db::{Database, HabitFilter};
pub use error::{Error, Result};
pub use tracker::HabitTracker;
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod logging;
pub mod tracker;
pub mod types;
