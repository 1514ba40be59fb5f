//! Init command implementation

use super::resolve_database_path;
use crate::storage::ProjectionDatabase;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Create the database and its tables at the resolved path
pub fn handle_init(db: Option<PathBuf>) -> Result<()> {
    let path = resolve_database_path(db)?;
    println!("Initializing database at {}...", path.display());

    ProjectionDatabase::open(&path)
        .with_context(|| format!("Failed to create database at {}", path.display()))?;

    println!("✓ Database ready");
    Ok(())
}
