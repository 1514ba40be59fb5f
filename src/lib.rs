//! Baseball Projections Library
//!
//! A relational store for baseball player projections from multiple
//! forecasting systems (and recorded actuals), with player identity
//! resolution across external ID namespaces and text reporting.
//!
//! ## Features
//!
//! - **Entity Store**: SQLite tables for players, projection systems, and
//!   batter/pitcher projections, with uniqueness enforced by the database
//! - **Identity Resolution**: Exact lookup by chadwick, MLB, FanGraphs and
//!   secondary cross-reference IDs
//! - **Projection Access**: A player's projections filtered by system and year
//! - **Reports**: Aligned text tables per player, batters and pitchers
//!
//! ## Quick Start
//!
//! ```rust
//! use baseball_projections::{report::render_report, storage::*, IdField, ProjectionKind, Season};
//!
//! # fn example() -> baseball_projections::Result<()> {
//! let mut db = ProjectionDatabase::open_in_memory()?;
//!
//! let mut trout = NewPlayer::default();
//! trout.ids.fg_id = Some("10155".to_string());
//! trout.last_name = Some("Trout".to_string());
//! trout.first_name = Some("Mike".to_string());
//! let trout = db.insert_player(&trout)?;
//!
//! let steamer = db.insert_projection_system("Steamer", Season::new(2024), false)?;
//! let mut line = BatterProjection::new(trout.id, steamer.id);
//! line.hr = Some(32.0);
//! db.insert_batter_projection(&line)?;
//!
//! let player = db.find_player(IdField::FgId, "10155")?.into_unique().expect("inserted above");
//! let batters = db.get_projections(&player, ProjectionKind::Batter, &ProjectionFilter::default())?;
//! print!("{}", render_report(&player, &batters, &[])?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file to avoid passing `--db` to every command:
//! ```bash
//! export BASEBALL_PROJECTIONS_DB=~/projections.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod report;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{IdField, NameField, PlayerId, ProjectionId, ProjectionKind, Season, SystemId};
pub use error::{ProjectionError, Result};

pub const DB_PATH_ENV_VAR: &str = "BASEBALL_PROJECTIONS_DB";
