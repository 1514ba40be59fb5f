//! Database schema and connection management

use super::fields::{BatterProjection, PitcherProjection, ProjectionTable};
use crate::cli::types::IdField;
use crate::error::{ProjectionError, Result};
use dirs::data_dir;
use log::debug;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for players, projection systems and projections
pub struct ProjectionDatabase {
    pub(crate) conn: Connection,
}

impl ProjectionDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!("Opening projection database at {}", path.display());
        Self::with_connection(Connection::open(path)?)
    }

    /// Fresh in-memory database, used by tests and dry runs
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        // SQLite leaves foreign keys off unless asked, per connection
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the default path of the database file
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| {
            ProjectionError::not_found("a platform data directory for the database")
        })?;
        Ok(data_dir.join("baseball-projections").join("projections.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;

        // Create players table
        tx.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY,
                chadwick_id VARCHAR(50) UNIQUE,
                mlb_id VARCHAR(20) UNIQUE,
                fg_id VARCHAR(20) UNIQUE,
                retrosheet_id VARCHAR(20),
                br_id VARCHAR(20),
                bp_id VARCHAR(20),
                lahman_id VARCHAR(20),
                steamer_id VARCHAR(20),
                last_name VARCHAR(50),
                first_name VARCHAR(50),
                birthdate DATE
            )",
            [],
        )?;

        // Index every identifier column, unique or not
        for field in IdField::ALL {
            tx.execute(
                &format!(
                    "CREATE INDEX IF NOT EXISTS idx_{0} ON players({0})",
                    field.column()
                ),
                [],
            )?;
        }

        // Create projection_systems table
        tx.execute(
            "CREATE TABLE IF NOT EXISTS projection_systems (
                id INTEGER PRIMARY KEY,
                name VARCHAR(20) NOT NULL CHECK (trim(name) <> ''),
                year INTEGER NOT NULL CHECK (year BETWEEN 0 AND 65535),
                is_actual BOOLEAN NOT NULL DEFAULT 0,
                UNIQUE (name, year)
            )",
            [],
        )?;

        tx.execute(&BatterProjection::create_table_sql(), [])?;
        tx.execute(&PitcherProjection::create_table_sql(), [])?;

        // Owned-collection lookups go by player; bulk re-import goes by system
        for table in [BatterProjection::TABLE, PitcherProjection::TABLE] {
            tx.execute(
                &format!(
                    "CREATE INDEX IF NOT EXISTS idx_{0}_player ON {0}(player_id)",
                    table
                ),
                [],
            )?;
            tx.execute(
                &format!(
                    "CREATE INDEX IF NOT EXISTS idx_{0}_system ON {0}(projection_system_id)",
                    table
                ),
                [],
            )?;
        }

        tx.commit()?;
        Ok(())
    }
}
