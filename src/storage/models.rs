//! Data models for the storage layer

use crate::cli::types::{IdField, PlayerId, ProjectionKind, Season, SystemId};
use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use super::fields::{BatterProjection, PitcherProjection, ProjectionTable};

/// External identifiers a player is known by.
///
/// The first three are canonical and unique across the store; the rest are
/// best-effort cross-references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIds {
    pub chadwick_id: Option<String>,
    pub mlb_id: Option<String>,
    pub fg_id: Option<String>,
    pub retrosheet_id: Option<String>,
    pub br_id: Option<String>,
    pub bp_id: Option<String>,
    pub lahman_id: Option<String>,
    pub steamer_id: Option<String>,
}

impl ExternalIds {
    pub fn get(&self, field: IdField) -> Option<&str> {
        match field {
            IdField::ChadwickId => self.chadwick_id.as_deref(),
            IdField::MlbId => self.mlb_id.as_deref(),
            IdField::FgId => self.fg_id.as_deref(),
            IdField::RetrosheetId => self.retrosheet_id.as_deref(),
            IdField::BrId => self.br_id.as_deref(),
            IdField::BpId => self.bp_id.as_deref(),
            IdField::LahmanId => self.lahman_id.as_deref(),
            IdField::SteamerId => self.steamer_id.as_deref(),
        }
    }

    pub fn set(&mut self, field: IdField, value: Option<String>) {
        let slot = match field {
            IdField::ChadwickId => &mut self.chadwick_id,
            IdField::MlbId => &mut self.mlb_id,
            IdField::FgId => &mut self.fg_id,
            IdField::RetrosheetId => &mut self.retrosheet_id,
            IdField::BrId => &mut self.br_id,
            IdField::BpId => &mut self.bp_id,
            IdField::LahmanId => &mut self.lahman_id,
            IdField::SteamerId => &mut self.steamer_id,
        };
        *slot = value;
    }
}

/// A player as supplied by an importer, before the store assigns an ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPlayer {
    #[serde(flatten)]
    pub ids: ExternalIds,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
}

/// Player information stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(flatten)]
    pub ids: ExternalIds,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
}

impl Player {
    /// Time elapsed between the player's birthdate and `on`.
    pub fn age(&self, on: NaiveDate) -> Option<TimeDelta> {
        self.birthdate.map(|born| on.signed_duration_since(born))
    }

    /// Age in completed years as of `on`; `None` before birth or without a birthdate.
    pub fn age_in_years(&self, on: NaiveDate) -> Option<u32> {
        self.birthdate.and_then(|born| on.years_since(born))
    }

    pub fn external_id(&self, field: IdField) -> Option<&str> {
        self.ids.get(field)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Player {} ({}, {})>",
            self.id,
            self.last_name.as_deref().unwrap_or("-"),
            self.first_name.as_deref().unwrap_or("-")
        )
    }
}

/// A named projection source for one season, or that season's actual results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSystem {
    pub id: SystemId,
    pub name: String,
    pub year: Season,
    pub is_actual: bool,
}

impl fmt::Display for ProjectionSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ProjectionSystem {} ({}, {})>",
            self.id, self.name, self.year
        )
    }
}

/// Either kind of projection row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Projection {
    Batter(BatterProjection),
    Pitcher(PitcherProjection),
}

impl Projection {
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Projection::Batter(_) => ProjectionKind::Batter,
            Projection::Pitcher(_) => ProjectionKind::Pitcher,
        }
    }

    pub fn stat(&self, column: &str) -> crate::Result<Option<f64>> {
        match self {
            Projection::Batter(p) => p.stat(column),
            Projection::Pitcher(p) => p.stat(column),
        }
    }
}

impl From<BatterProjection> for Projection {
    fn from(p: BatterProjection) -> Self {
        Projection::Batter(p)
    }
}

impl From<PitcherProjection> for Projection {
    fn from(p: PitcherProjection) -> Self {
        Projection::Pitcher(p)
    }
}

/// A projection row together with the system it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRecord {
    pub system: ProjectionSystem,
    pub projection: Projection,
}

impl ProjectionRecord {
    /// Report ordering key: system name, then year.
    pub fn sort_key(&self) -> (&str, Season) {
        (self.system.name.as_str(), self.system.year)
    }
}
