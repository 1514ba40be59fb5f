//! Projection command implementation

use super::{common::lookup_player, open_database};
use crate::{
    cli::types::{IdField, ProjectionKind, Season},
    report::render_section,
    storage::{ProjectionDatabase, ProjectionFilter, ProjectionMatch},
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Parameters for the projection command
#[derive(Debug, Clone)]
pub struct ProjectionParams {
    pub db: Option<PathBuf>,
    pub id_type: IdField,
    pub id: String,
    pub kind: ProjectionKind,
    pub system: Option<String>,
    pub year: Option<Season>,
    pub as_json: bool,
}

/// Look up the matching projections and render them.
///
/// Text output reuses the report section layout. JSON output mirrors the
/// single-or-list lookup: one object when exactly one projection matches,
/// otherwise an array.
pub fn projection_output(db: &ProjectionDatabase, params: &ProjectionParams) -> Result<String> {
    let player = lookup_player(db, params.id_type, &params.id)?;
    let filter = ProjectionFilter::new(params.system.clone(), params.year);

    let matched = db.get_projection(&player, params.kind, &filter)?;

    if params.as_json {
        let json = match &matched {
            ProjectionMatch::Single(record) => serde_json::to_string_pretty(record)?,
            ProjectionMatch::Many(records) => serde_json::to_string_pretty(records)?,
        };
        return Ok(json);
    }

    let records = matched.into_vec();
    let mut lines = vec![player.to_string()];
    lines.extend(render_section(params.kind, &records)?);
    Ok(lines.join("\n"))
}

/// Handle the projection command
pub fn handle_projection(params: ProjectionParams) -> Result<()> {
    let db = open_database(params.db.clone()).context("Failed to open projection database")?;
    println!("{}", projection_output(&db, &params)?);
    Ok(())
}
