//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{IdField, ProjectionKind, Season};

/// Identifies the player a command targets.
#[derive(Debug, Args)]
pub struct PlayerLookup {
    /// Identifier namespace: chadwick_id, mlb_id, fg_id, retrosheet_id, br_id, bp_id, lahman_id or steamer_id.
    #[clap(long = "id-type", default_value = "fg_id")]
    pub id_type: IdField,

    /// Identifier value, matched exactly.
    #[clap(long)]
    pub id: String,
}

#[derive(Debug, Parser)]
#[clap(
    name = "baseball-projections",
    about = "Baseball projection store: player lookup and projection reports"
)]
pub struct Cli {
    /// Database file (or set `BASEBALL_PROJECTIONS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database and its tables if they do not exist yet.
    Init,

    /// Find players by an external identifier.
    ///
    /// Secondary identifiers may match more than one player; every match is
    /// listed and flagged for review.
    FindPlayer {
        #[clap(flatten)]
        lookup: PlayerLookup,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a player's batter or pitcher projections, optionally filtered.
    Projection {
        #[clap(flatten)]
        lookup: PlayerLookup,

        /// Projection kind: batter or pitcher.
        #[clap(long, short)]
        kind: ProjectionKind,

        /// Only projections from this system (e.g. Steamer).
        #[clap(long)]
        system: Option<String>,

        /// Only projections for this season (e.g. 2024).
        #[clap(long, short)]
        year: Option<Season>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print a player's projections across all systems and years.
    Report {
        #[clap(flatten)]
        lookup: PlayerLookup,
    },

    /// List projection systems.
    Systems {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
