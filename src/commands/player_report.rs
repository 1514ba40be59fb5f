//! Player report command implementation

use super::{common::lookup_player, open_database};
use crate::cli::types::IdField;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Handle the report command
pub fn handle_report(db: Option<PathBuf>, id_type: IdField, id: String) -> Result<()> {
    let db = open_database(db).context("Failed to open projection database")?;
    let player = lookup_player(&db, id_type, &id)?;

    let report = db
        .player_report(&player)
        .with_context(|| format!("Failed to build report for {}", player))?;
    print!("{}", report);
    Ok(())
}
