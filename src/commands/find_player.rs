//! Find-player command implementation

use super::{common::describe_player, open_database};
use crate::{cli::types::IdField, storage::ProjectionDatabase};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Render every player matching the identifier, one per line or as JSON.
///
/// Secondary identifiers can match several players; all of them are listed
/// so the duplicate can be reviewed.
pub fn find_player_output(
    db: &ProjectionDatabase,
    id_type: IdField,
    id: &str,
    as_json: bool,
) -> Result<String> {
    let players = db.find_players(id_type, id)?;

    if as_json {
        return Ok(serde_json::to_string_pretty(&players)?);
    }

    if players.is_empty() {
        return Ok(format!("No player with {} = {}", id_type, id));
    }

    let mut lines: Vec<String> = players.iter().map(describe_player).collect();
    if players.len() > 1 {
        lines.push(format!(
            "⚠ {} players share {} = {}; flag for manual review",
            players.len(),
            id_type,
            id
        ));
    }
    Ok(lines.join("\n"))
}

/// Handle the find-player command
pub fn handle_find_player(
    db: Option<PathBuf>,
    id_type: IdField,
    id: String,
    as_json: bool,
) -> Result<()> {
    let db = open_database(db).context("Failed to open projection database")?;
    println!("{}", find_player_output(&db, id_type, &id, as_json)?);
    Ok(())
}
