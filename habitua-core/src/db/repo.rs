//! Database repository layer
//!
//! Query and insert operations for habits and their check-off log.

use crate::error::{Error, Result};
use crate::types::{CheckOff, Habit, Periodicity};
use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database handle with connection pooling (single connection for now)
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open(path: &PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for better concurrency
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA cache_size = -64000;  -- 64MB cache
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run migrations on this database
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        super::schema::run_migrations(&conn)
    }

    // ============================================
    // Habit operations
    // ============================================

    /// Insert a new habit, returning its assigned row id
    pub fn insert_habit(
        &self,
        name: &str,
        description: &str,
        periodicity: Periodicity,
        start_date: Option<NaiveDate>,
    ) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO habits (name, description, periodicity, start_date, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                name,
                description,
                periodicity.as_str(),
                start_date.map(|d| d.format(DATE_FORMAT).to_string()),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Get a habit by name, with its check-off log attached
    pub fn get_habit(&self, name: &str) -> Result<Option<Habit>> {
        let conn = self.conn.lock().unwrap();
        let habit = conn
            .query_row(
                "SELECT * FROM habits WHERE name = ?",
                [name],
                Self::row_to_habit,
            )
            .optional()
            .map_err(Error::from)?;

        match habit {
            Some(mut habit) => {
                habit.check_off_log = Self::load_check_off_dates(&conn, habit.id)?;
                Ok(Some(habit))
            }
            None => Ok(None),
        }
    }

    /// List habits with optional filtering, check-off logs attached
    pub fn list_habits(&self, filter: &HabitFilter) -> Result<Vec<Habit>> {
        let conn = self.conn.lock().unwrap();

        let mut sql = String::from("SELECT * FROM habits WHERE 1=1");
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![];

        if let Some(periodicity) = &filter.periodicity {
            sql.push_str(" AND periodicity = ?");
            params.push(Box::new(periodicity.as_str().to_string()));
        }

        sql.push_str(" ORDER BY name");

        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let mut stmt = conn.prepare(&sql)?;
        let mut habits = stmt
            .query_map(params_refs.as_slice(), Self::row_to_habit)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        for habit in &mut habits {
            habit.check_off_log = Self::load_check_off_dates(&conn, habit.id)?;
        }

        Ok(habits)
    }

    /// Check whether a habit with this name exists
    pub fn habit_exists(&self, name: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM habits WHERE name = ?",
            [name],
            |r| r.get(0),
        )?;
        Ok(count > 0)
    }

    /// Total number of habits
    pub fn count_habits(&self) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM habits", [], |r| r.get(0))?;
        Ok(count)
    }

    /// Delete a habit and (via cascade) its check-offs.
    ///
    /// Returns whether a habit with that name existed.
    pub fn delete_habit(&self, name: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute("DELETE FROM habits WHERE name = ?", [name])?;
        Ok(rows > 0)
    }

    fn row_to_habit(row: &Row) -> rusqlite::Result<Habit> {
        let periodicity_str: String = row.get("periodicity")?;
        let start_date_str: Option<String> = row.get("start_date")?;

        Ok(Habit {
            id: row.get("id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            periodicity: periodicity_str.parse().unwrap_or(Periodicity::Daily),
            start_date: start_date_str
                .and_then(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).ok()),
            check_off_log: Vec::new(),
        })
    }

    // ============================================
    // Check-off operations
    // ============================================

    /// Record a completion event for a habit
    pub fn insert_check_off(&self, habit_id: i64, date: NaiveDate) -> Result<CheckOff> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO check_offs (habit_id, date) VALUES (?1, ?2)",
            params![habit_id, date.format(DATE_FORMAT).to_string()],
        )?;
        Ok(CheckOff {
            id: conn.last_insert_rowid(),
            habit_id,
            date,
        })
    }

    /// All completion events for a habit, oldest first
    pub fn list_check_offs(&self, habit_id: i64) -> Result<Vec<CheckOff>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, habit_id, date FROM check_offs WHERE habit_id = ? ORDER BY date, id",
        )?;
        let check_offs = stmt
            .query_map([habit_id], Self::row_to_check_off)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(check_offs)
    }

    fn row_to_check_off(row: &Row) -> rusqlite::Result<CheckOff> {
        let date_str: String = row.get("date")?;
        Ok(CheckOff {
            id: row.get("id")?,
            habit_id: row.get("habit_id")?,
            date: NaiveDate::parse_from_str(&date_str, DATE_FORMAT).unwrap_or_default(),
        })
    }

    /// Dates only, ascending, for attaching to a `Habit` snapshot
    fn load_check_off_dates(conn: &Connection, habit_id: i64) -> Result<Vec<NaiveDate>> {
        let mut stmt =
            conn.prepare("SELECT date FROM check_offs WHERE habit_id = ? ORDER BY date, id")?;
        let dates = stmt
            .query_map([habit_id], |row| row.get::<_, String>(0))?
            .filter_map(|r| r.ok())
            .filter_map(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).ok())
            .collect();
        Ok(dates)
    }
}

/// Filter for listing habits
#[derive(Debug, Default)]
pub struct HabitFilter {
    /// Filter by periodicity
    pub periodicity: Option<Periodicity>,
}
