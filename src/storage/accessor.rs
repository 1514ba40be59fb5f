//! Filtered access to a player's projections

use super::{
    models::{BatterProjection, PitcherProjection, Player, ProjectionRecord, ProjectionSystem},
    schema::ProjectionDatabase,
};
use crate::cli::types::{ProjectionKind, Season};
use crate::error::{ProjectionError, Result};

/// Optional system-name and year restrictions; `None` means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionFilter {
    pub system_name: Option<String>,
    pub year: Option<Season>,
}

impl ProjectionFilter {
    pub fn new(system_name: Option<String>, year: Option<Season>) -> Self {
        Self { system_name, year }
    }

    pub fn system(mut self, name: impl Into<String>) -> Self {
        self.system_name = Some(name.into());
        self
    }

    pub fn year(mut self, year: Season) -> Self {
        self.year = Some(year);
        self
    }

    /// Reject filters that can never be meaningful.
    pub fn validate(&self) -> Result<()> {
        match &self.system_name {
            Some(name) if name.trim().is_empty() => Err(ProjectionError::invalid_argument(
                "system name filter must not be empty",
            )),
            _ => Ok(()),
        }
    }

    pub fn matches(&self, system: &ProjectionSystem) -> bool {
        self.system_name
            .as_deref()
            .map_or(true, |name| system.name == name)
            && self.year.map_or(true, |year| system.year == year)
    }
}

/// Result of the single-or-list convenience lookup.
///
/// `Many` covers both "nothing matched" and "more than one matched"; only the
/// length of the list tells them apart.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionMatch {
    Single(ProjectionRecord),
    Many(Vec<ProjectionRecord>),
}

impl From<Vec<ProjectionRecord>> for ProjectionMatch {
    fn from(mut records: Vec<ProjectionRecord>) -> Self {
        if records.len() == 1 {
            ProjectionMatch::Single(records.remove(0))
        } else {
            ProjectionMatch::Many(records)
        }
    }
}

impl ProjectionMatch {
    pub fn single(&self) -> Option<&ProjectionRecord> {
        match self {
            ProjectionMatch::Single(record) => Some(record),
            ProjectionMatch::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<ProjectionRecord> {
        match self {
            ProjectionMatch::Single(record) => vec![record],
            ProjectionMatch::Many(records) => records,
        }
    }
}

impl ProjectionDatabase {
    /// All of a player's projections of `kind` that pass `filter`, in store order
    pub fn get_projections(
        &self,
        player: &Player,
        kind: ProjectionKind,
        filter: &ProjectionFilter,
    ) -> Result<Vec<ProjectionRecord>> {
        filter.validate()?;

        let records: Vec<ProjectionRecord> = match kind {
            ProjectionKind::Batter => self
                .projections_for_player::<BatterProjection>(player.id)?
                .into_iter()
                .map(|(system, proj)| ProjectionRecord {
                    system,
                    projection: proj.into(),
                })
                .collect(),
            ProjectionKind::Pitcher => self
                .projections_for_player::<PitcherProjection>(player.id)?
                .into_iter()
                .map(|(system, proj)| ProjectionRecord {
                    system,
                    projection: proj.into(),
                })
                .collect(),
        };

        Ok(records
            .into_iter()
            .filter(|record| filter.matches(&record.system))
            .collect())
    }

    /// The one matching projection if exactly one matches, else every match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baseball_projections::{storage::*, ProjectionKind, Season};
    ///
    /// # fn example() -> baseball_projections::Result<()> {
    /// let mut db = ProjectionDatabase::open_in_memory()?;
    /// let player = db.insert_player(&NewPlayer::default())?;
    /// let steamer = db.insert_projection_system("Steamer", Season::new(2024), false)?;
    ///
    /// let mut line = BatterProjection::new(player.id, steamer.id);
    /// line.hr = Some(32.0);
    /// db.insert_batter_projection(&line)?;
    ///
    /// let filter = ProjectionFilter::default().system("Steamer").year(Season::new(2024));
    /// match db.get_projection(&player, ProjectionKind::Batter, &filter)? {
    ///     ProjectionMatch::Single(record) => assert_eq!(record.projection.stat("hr")?, Some(32.0)),
    ///     ProjectionMatch::Many(records) => panic!("expected one match, got {}", records.len()),
    /// }
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn get_projection(
        &self,
        player: &Player,
        kind: ProjectionKind,
        filter: &ProjectionFilter,
    ) -> Result<ProjectionMatch> {
        Ok(self.get_projections(player, kind, filter)?.into())
    }

    /// `get_projection` with the kind given by name (`batter` or `pitcher`)
    pub fn get_projection_by_kind_name(
        &self,
        player: &Player,
        kind: &str,
        system_name: Option<&str>,
        year: Option<Season>,
    ) -> Result<ProjectionMatch> {
        let kind: ProjectionKind = kind.parse()?;
        let filter = ProjectionFilter::new(system_name.map(str::to_string), year);
        self.get_projection(player, kind, &filter)
    }
}
