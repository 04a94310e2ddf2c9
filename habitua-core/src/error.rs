//! Error types for habitua-core

use thiserror::Error;

/// Main error type for the habitua-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Habit validation failed (empty name, bad periodicity, bad date)
    #[error("invalid habit: {0}")]
    InvalidHabit(String),

    /// A habit with this name already exists
    #[error("habit already exists: {0}")]
    HabitExists(String),

    /// Habit not found
    #[error("habit not found: {0}")]
    HabitNotFound(String),

    /// Check-off date lies in the future
    #[error("cannot check off {date}: date is after today ({today})")]
    FutureCheckOff {
        date: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },
}

/// Result type alias for habitua-core
pub type Result<T> = std::result::Result<T, Error>;
