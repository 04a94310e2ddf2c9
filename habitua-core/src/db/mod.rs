//! Database layer for habitua
//!
//! This module provides the storage layer using SQLite with:
//! - Schema migrations
//! - Repository pattern for queries

pub mod repo;
pub mod schema;

pub use repo::{Database, HabitFilter, DATE_FORMAT};
