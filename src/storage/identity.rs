//! Player identity resolution across external ID namespaces.
//!
//! Matching is exact on the identifier value. Canonical fields are unique in
//! the store, so they resolve to at most one player. Secondary fields carry no
//! such guarantee: when inconsistent upstream data leaves several players
//! sharing a value, the lookup is ambiguous and the caller decides what to do
//! with it (typically flag it for manual review).

use super::{
    models::{ExternalIds, Player},
    queries::{row_to_player, PLAYER_COLUMNS},
    schema::ProjectionDatabase,
};
use crate::cli::types::IdField;
use crate::error::{ProjectionError, Result};
use log::warn;
use rusqlite::params;

/// Outcome of looking a player up by one identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum IdentityMatch {
    NotFound,
    Unique(Player),
    /// Several players share a secondary identifier.
    Ambiguous(Vec<Player>),
}

impl IdentityMatch {
    fn from_matches(mut players: Vec<Player>) -> Self {
        match players.len() {
            0 => IdentityMatch::NotFound,
            1 => IdentityMatch::Unique(players.remove(0)),
            _ => IdentityMatch::Ambiguous(players),
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, IdentityMatch::Ambiguous(_))
    }

    /// The player, when exactly one matched.
    pub fn into_unique(self) -> Option<Player> {
        match self {
            IdentityMatch::Unique(player) => Some(player),
            IdentityMatch::NotFound | IdentityMatch::Ambiguous(_) => None,
        }
    }

    /// Every matching player, in primary key order.
    pub fn into_players(self) -> Vec<Player> {
        match self {
            IdentityMatch::NotFound => Vec::new(),
            IdentityMatch::Unique(player) => vec![player],
            IdentityMatch::Ambiguous(players) => players,
        }
    }
}

impl ProjectionDatabase {
    /// Every player whose `field` equals `value`, in primary key order
    pub fn find_players(&self, field: IdField, value: &str) -> Result<Vec<Player>> {
        // Column names come from IdField, never from caller input
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM players WHERE {} = ?1 ORDER BY id",
            PLAYER_COLUMNS,
            field.column()
        ))?;
        let rows = stmt.query_map(params![value], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Find the player with `field` = `value`.
    ///
    /// Canonical fields yield `NotFound` or `Unique`. A secondary-field value
    /// shared by several players comes back as `Ambiguous` with every match,
    /// leaving the caller to decide (typically flag it for review).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baseball_projections::{storage::*, IdField};
    ///
    /// # fn example() -> baseball_projections::Result<()> {
    /// let mut db = ProjectionDatabase::open_in_memory()?;
    /// let mut trout = NewPlayer::default();
    /// trout.ids.fg_id = Some("10155".to_string());
    /// db.insert_player(&trout)?;
    ///
    /// let found = db.find_player(IdField::FgId, "10155")?;
    /// assert!(found.into_unique().is_some());
    /// assert_eq!(db.find_player(IdField::FgId, "99999")?, IdentityMatch::NotFound);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn find_player(&self, field: IdField, value: &str) -> Result<IdentityMatch> {
        let resolved = IdentityMatch::from_matches(self.find_players(field, value)?);
        if let IdentityMatch::Ambiguous(players) = &resolved {
            warn!(
                "{} players share {} = {}; needs manual review",
                players.len(),
                field,
                value
            );
        }
        Ok(resolved)
    }

    /// Exactly one player for a field given by name.
    ///
    /// For callers that cannot proceed without a single player: a miss is
    /// `NotFound` and a shared secondary value is `AmbiguousMatch`.
    pub fn require_player(&self, id_type: &str, value: &str) -> Result<Player> {
        let field: IdField = id_type.parse()?;
        match self.find_player(field, value)? {
            IdentityMatch::Unique(player) => Ok(player),
            IdentityMatch::NotFound => Err(ProjectionError::not_found(format!(
                "player with {} = {}",
                field, value
            ))),
            IdentityMatch::Ambiguous(players) => Err(ProjectionError::AmbiguousMatch {
                field: field.to_string(),
                value: value.to_string(),
                count: players.len(),
            }),
        }
    }

    /// Reconcile a record carrying several identifiers against existing players.
    ///
    /// Tries the canonical fields in order (chadwick, MLB, FanGraphs) and
    /// returns the first field that matches anyone. Secondary fields are not
    /// consulted.
    pub fn find_player_by_any(&self, ids: &ExternalIds) -> Result<IdentityMatch> {
        for field in IdField::canonical() {
            if let Some(value) = ids.get(*field) {
                let resolved = self.find_player(*field, value)?;
                if resolved != IdentityMatch::NotFound {
                    return Ok(resolved);
                }
            }
        }
        Ok(IdentityMatch::NotFound)
    }
}
