//! Systems command implementation

use super::open_database;
use crate::storage::ProjectionDatabase;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// List projection systems ordered by name and year
pub fn systems_output(db: &ProjectionDatabase, as_json: bool) -> Result<String> {
    let systems = db.list_projection_systems()?;

    if as_json {
        return Ok(serde_json::to_string_pretty(&systems)?);
    }

    if systems.is_empty() {
        return Ok("No projection systems".to_string());
    }

    Ok(systems
        .iter()
        .map(|s| {
            format!(
                "{:>20}, {:>4}{}",
                s.name,
                s.year.as_u16(),
                if s.is_actual { " (actual)" } else { "" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Handle the systems command
pub fn handle_systems(db: Option<PathBuf>, as_json: bool) -> Result<()> {
    let db = open_database(db).context("Failed to open projection database")?;
    println!("{}", systems_output(&db, as_json)?);
    Ok(())
}
