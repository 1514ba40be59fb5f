//! Basic database write and read operations

use super::{models::*, schema::ProjectionDatabase};
use crate::cli::types::{PlayerId, ProjectionId, Season, SystemId};
use crate::error::{ProjectionError, Result};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Select list matching `row_to_player`.
pub(crate) const PLAYER_COLUMNS: &str = "id, chadwick_id, mlb_id, fg_id, retrosheet_id, br_id, bp_id, \
     lahman_id, steamer_id, last_name, first_name, birthdate";

const SYSTEM_COLUMNS: &str = "id, name, year, is_actual";

impl ProjectionDatabase {
    /// Insert a newly observed player.
    ///
    /// Fails with `ConstraintViolation` if any canonical ID is already taken.
    pub fn insert_player(&mut self, player: &NewPlayer) -> Result<Player> {
        let ids = &player.ids;
        self.conn.execute(
            "INSERT INTO players
             (chadwick_id, mlb_id, fg_id, retrosheet_id, br_id, bp_id, lahman_id, steamer_id,
              last_name, first_name, birthdate)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                ids.chadwick_id,
                ids.mlb_id,
                ids.fg_id,
                ids.retrosheet_id,
                ids.br_id,
                ids.bp_id,
                ids.lahman_id,
                ids.steamer_id,
                player.last_name,
                player.first_name,
                player.birthdate,
            ],
        )?;

        let id = PlayerId::new(self.conn.last_insert_rowid());
        debug!("Inserted player {} (fg_id: {:?})", id, ids.fg_id);

        Ok(Player {
            id,
            ids: player.ids.clone(),
            last_name: player.last_name.clone(),
            first_name: player.first_name.clone(),
            birthdate: player.birthdate,
        })
    }

    /// Overwrite a stored player's identifiers and descriptive fields.
    ///
    /// Used by reconciliation to back-fill secondary IDs.
    pub fn update_player(&mut self, player: &Player) -> Result<()> {
        let ids = &player.ids;
        let rows_affected = self.conn.execute(
            "UPDATE players
             SET chadwick_id = ?2, mlb_id = ?3, fg_id = ?4, retrosheet_id = ?5, br_id = ?6,
                 bp_id = ?7, lahman_id = ?8, steamer_id = ?9,
                 last_name = ?10, first_name = ?11, birthdate = ?12
             WHERE id = ?1",
            params![
                player.id,
                ids.chadwick_id,
                ids.mlb_id,
                ids.fg_id,
                ids.retrosheet_id,
                ids.br_id,
                ids.bp_id,
                ids.lahman_id,
                ids.steamer_id,
                player.last_name,
                player.first_name,
                player.birthdate,
            ],
        )?;

        if rows_affected == 0 {
            return Err(ProjectionError::not_found(format!("player {}", player.id)));
        }
        Ok(())
    }

    /// Get a player by primary key
    pub fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                &format!("SELECT {} FROM players WHERE id = ?1", PLAYER_COLUMNS),
                params![id],
                row_to_player,
            )
            .optional()?;
        Ok(player)
    }

    /// Get all players, ordered by primary key
    pub fn get_all_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM players ORDER BY id", PLAYER_COLUMNS))?;
        let rows = stmt.query_map([], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Register a projection system for a season.
    ///
    /// Fails with `InvalidArgument` for a blank name and with
    /// `ConstraintViolation` if `(name, year)` already exists.
    pub fn insert_projection_system(
        &mut self,
        name: &str,
        year: Season,
        is_actual: bool,
    ) -> Result<ProjectionSystem> {
        if name.trim().is_empty() {
            return Err(ProjectionError::invalid_argument(
                "projection system name must not be empty",
            ));
        }

        self.conn.execute(
            "INSERT INTO projection_systems (name, year, is_actual) VALUES (?1, ?2, ?3)",
            params![name, year, is_actual],
        )?;

        let system = ProjectionSystem {
            id: SystemId::new(self.conn.last_insert_rowid()),
            name: name.to_string(),
            year,
            is_actual,
        };
        debug!("Inserted {}", system);
        Ok(system)
    }

    pub fn get_projection_system(&self, id: SystemId) -> Result<Option<ProjectionSystem>> {
        let system = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM projection_systems WHERE id = ?1",
                    SYSTEM_COLUMNS
                ),
                params![id],
                |row| row_to_system(row, 0),
            )
            .optional()?;
        Ok(system)
    }

    /// Look up a system by its unique `(name, year)` pair
    pub fn find_projection_system(
        &self,
        name: &str,
        year: Season,
    ) -> Result<Option<ProjectionSystem>> {
        let system = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM projection_systems WHERE name = ?1 AND year = ?2",
                    SYSTEM_COLUMNS
                ),
                params![name, year],
                |row| row_to_system(row, 0),
            )
            .optional()?;
        Ok(system)
    }

    /// All projection systems ordered by name, then year
    pub fn list_projection_systems(&self) -> Result<Vec<ProjectionSystem>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM projection_systems ORDER BY name, year",
            SYSTEM_COLUMNS
        ))?;
        let rows = stmt.query_map([], |row| row_to_system(row, 0))?;

        let mut systems = Vec::new();
        for row in rows {
            systems.push(row?);
        }
        Ok(systems)
    }

    /// Insert a batter projection; fails if the (player, system) pair already has one
    pub fn insert_batter_projection(&mut self, proj: &BatterProjection) -> Result<ProjectionId> {
        insert_projection(&self.conn, proj)
    }

    /// Insert a pitcher projection; fails if the (player, system) pair already has one
    pub fn insert_pitcher_projection(&mut self, proj: &PitcherProjection) -> Result<ProjectionId> {
        insert_projection(&self.conn, proj)
    }

    /// Re-import a batter projection, replacing any row for the same (player, system) pair
    pub fn replace_batter_projection(&mut self, proj: &BatterProjection) -> Result<ProjectionId> {
        self.replace_projection(proj)
    }

    /// Re-import a pitcher projection, replacing any row for the same (player, system) pair
    pub fn replace_pitcher_projection(
        &mut self,
        proj: &PitcherProjection,
    ) -> Result<ProjectionId> {
        self.replace_projection(proj)
    }

    fn replace_projection<P: ProjectionTable>(&mut self, proj: &P) -> Result<ProjectionId> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute(
            &format!(
                "DELETE FROM {} WHERE player_id = ?1 AND projection_system_id = ?2",
                P::TABLE
            ),
            params![proj.player_id(), proj.projection_system_id()],
        )?;
        let id = insert_projection(&tx, proj)?;
        tx.commit()?;

        if removed > 0 {
            debug!(
                "Replaced {} row for player {} in system {}",
                P::KIND,
                proj.player_id(),
                proj.projection_system_id()
            );
        }
        Ok(id)
    }

    /// Remove every projection of a system ahead of a bulk re-import.
    ///
    /// Returns the number of (batter, pitcher) rows deleted.
    pub fn delete_projections_for_system(&mut self, system_id: SystemId) -> Result<(usize, usize)> {
        let tx = self.conn.transaction()?;
        let batters = tx.execute(
            &format!(
                "DELETE FROM {} WHERE projection_system_id = ?1",
                BatterProjection::TABLE
            ),
            params![system_id],
        )?;
        let pitchers = tx.execute(
            &format!(
                "DELETE FROM {} WHERE projection_system_id = ?1",
                PitcherProjection::TABLE
            ),
            params![system_id],
        )?;
        tx.commit()?;

        info!(
            "Deleted {} batter and {} pitcher projections for system {}",
            batters, pitchers, system_id
        );
        Ok((batters, pitchers))
    }

    /// A player's owned projections of one kind, each joined with its system, in insertion order
    pub fn projections_for_player<P: ProjectionTable>(
        &self,
        player_id: PlayerId,
    ) -> Result<Vec<(ProjectionSystem, P)>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT ps.id, ps.name, ps.year, ps.is_actual, {}
             FROM {} p
             JOIN projection_systems ps ON ps.id = p.projection_system_id
             WHERE p.player_id = ?1
             ORDER BY p.id",
            P::select_columns("p"),
            P::TABLE
        ))?;

        let rows = stmt.query_map(params![player_id], |row| {
            Ok((row_to_system(row, 0)?, P::from_row(row, 4)?))
        })?;

        let mut projections = Vec::new();
        for row in rows {
            projections.push(row?);
        }
        Ok(projections)
    }

    pub fn batter_projections_for_player(
        &self,
        player_id: PlayerId,
    ) -> Result<Vec<(ProjectionSystem, BatterProjection)>> {
        self.projections_for_player(player_id)
    }

    pub fn pitcher_projections_for_player(
        &self,
        player_id: PlayerId,
    ) -> Result<Vec<(ProjectionSystem, PitcherProjection)>> {
        self.projections_for_player(player_id)
    }
}

fn insert_projection<P: ProjectionTable>(conn: &Connection, proj: &P) -> Result<ProjectionId> {
    conn.execute(&P::insert_sql(), &proj.to_params()[..])?;
    Ok(ProjectionId::new(conn.last_insert_rowid()))
}

/// Helper to convert a row selected with `PLAYER_COLUMNS` into a Player
pub(crate) fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        ids: ExternalIds {
            chadwick_id: row.get(1)?,
            mlb_id: row.get(2)?,
            fg_id: row.get(3)?,
            retrosheet_id: row.get(4)?,
            br_id: row.get(5)?,
            bp_id: row.get(6)?,
            lahman_id: row.get(7)?,
            steamer_id: row.get(8)?,
        },
        last_name: row.get(9)?,
        first_name: row.get(10)?,
        birthdate: row.get(11)?,
    })
}

fn row_to_system(row: &Row, offset: usize) -> rusqlite::Result<ProjectionSystem> {
    Ok(ProjectionSystem {
        id: row.get(offset)?,
        name: row.get(offset + 1)?,
        year: row.get(offset + 2)?,
        is_actual: row.get(offset + 3)?,
    })
}
