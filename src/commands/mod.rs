//! Command implementations for the baseball projections CLI

pub mod common;
pub mod find_player;
pub mod init;
pub mod player_report;
pub mod projection;
pub mod systems;


use crate::{storage::ProjectionDatabase, Result, DB_PATH_ENV_VAR};
use std::path::PathBuf;

/// Resolve the database path: explicit flag, then `BASEBALL_PROJECTIONS_DB`,
/// then the platform data directory.
pub fn resolve_database_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }

    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => ProjectionDatabase::default_path(),
    }
}

/// Open the database at the resolved path
pub fn open_database(db: Option<PathBuf>) -> Result<ProjectionDatabase> {
    let path = resolve_database_path(db)?;
    log::debug!("Using database {}", path.display());
    ProjectionDatabase::open(&path)
}
