//! Declarative column tables for the projection relations.
//!
//! Each projection kind is declared once with `projection_table!`, which
//! generates the record struct, its column lists, the `CREATE TABLE`
//! statement, row decoding and parameter binding. Column names are the
//! interchange contract with importers and must match the upstream field
//! names exactly.

use crate::cli::types::{PlayerId, ProjectionId, ProjectionKind, SystemId};
use crate::error::{ProjectionError, Result};
use rusqlite::{types::ToSql, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared behaviour of the generated projection records.
pub trait ProjectionTable: Sized {
    const KIND: ProjectionKind;
    const TABLE: &'static str;

    fn id(&self) -> Option<ProjectionId>;
    fn player_id(&self) -> PlayerId;
    fn projection_system_id(&self) -> SystemId;

    /// Value of a statistic column by name.
    fn stat(&self, column: &str) -> Result<Option<f64>>;

    fn create_table_sql() -> String;
    fn insert_sql() -> String;
    /// Comma-separated select list, every column prefixed by `alias`.
    fn select_columns(alias: &str) -> String;
    /// Number of columns `select_columns` yields.
    fn column_count() -> usize;
    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self>;
    /// Values in the order of `insert_sql`'s placeholders.
    fn to_params(&self) -> Vec<&dyn ToSql>;
}

fn unknown_column(table: &str, column: &str) -> ProjectionError {
    ProjectionError::invalid_argument(format!("{} has no statistic column '{}'", table, column))
}

macro_rules! projection_table {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $table:literal as $kind:ident {
            text { $($text:ident($len:literal)),* $(,)? }
            flags { $($flag:ident),* $(,)? }
            stats { $($stat:ident),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            /// Assigned by the store on insert.
            pub id: Option<ProjectionId>,
            pub player_id: PlayerId,
            pub projection_system_id: SystemId,
            $(pub $text: Option<String>,)*
            $(pub $flag: Option<i64>,)*
            $(pub $stat: Option<f64>,)*
        }

        impl $name {
            pub const TEXT_COLUMNS: &'static [&'static str] = &[$(stringify!($text)),*];
            pub const FLAG_COLUMNS: &'static [&'static str] = &[$(stringify!($flag)),*];
            pub const STAT_COLUMNS: &'static [&'static str] = &[$(stringify!($stat)),*];

            pub fn new(player_id: PlayerId, projection_system_id: SystemId) -> Self {
                Self {
                    player_id,
                    projection_system_id,
                    ..Default::default()
                }
            }

            /// Sets a statistic column by name, for importers mapping vendor columns.
            pub fn set_stat(&mut self, column: &str, value: Option<f64>) -> Result<()> {
                match column {
                    $(stringify!($stat) => self.$stat = value,)*
                    _ => return Err(unknown_column($table, column)),
                }
                Ok(())
            }

            fn data_columns() -> Vec<&'static str> {
                let mut columns = vec!["player_id", "projection_system_id"];
                columns.extend_from_slice(Self::TEXT_COLUMNS);
                columns.extend_from_slice(Self::FLAG_COLUMNS);
                columns.extend_from_slice(Self::STAT_COLUMNS);
                columns
            }
        }

        impl ProjectionTable for $name {
            const KIND: ProjectionKind = ProjectionKind::$kind;
            const TABLE: &'static str = $table;

            fn id(&self) -> Option<ProjectionId> {
                self.id
            }

            fn player_id(&self) -> PlayerId {
                self.player_id
            }

            fn projection_system_id(&self) -> SystemId {
                self.projection_system_id
            }

            fn stat(&self, column: &str) -> Result<Option<f64>> {
                match column {
                    $(stringify!($stat) => Ok(self.$stat),)*
                    _ => Err(unknown_column($table, column)),
                }
            }

            fn create_table_sql() -> String {
                let mut columns = vec![
                    "id INTEGER PRIMARY KEY".to_string(),
                    "player_id INTEGER NOT NULL REFERENCES players(id)".to_string(),
                    "projection_system_id INTEGER NOT NULL REFERENCES projection_systems(id)"
                        .to_string(),
                ];
                $(columns.push(format!("{} VARCHAR({})", stringify!($text), $len));)*
                $(columns.push(format!("{} INTEGER", stringify!($flag)));)*
                columns.extend(Self::STAT_COLUMNS.iter().map(|c| format!("{} REAL", c)));
                columns.push("UNIQUE (player_id, projection_system_id)".to_string());

                format!(
                    "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
                    $table,
                    columns.join(",\n    ")
                )
            }

            fn insert_sql() -> String {
                let columns = Self::data_columns();
                let placeholders = (1..=columns.len())
                    .map(|i| format!("?{}", i))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "INSERT INTO {} ({}) VALUES ({})",
                    $table,
                    columns.join(", "),
                    placeholders
                )
            }

            fn select_columns(alias: &str) -> String {
                std::iter::once("id")
                    .chain(Self::data_columns())
                    .map(|c| format!("{}.{}", alias, c))
                    .collect::<Vec<_>>()
                    .join(", ")
            }

            fn column_count() -> usize {
                1 + Self::data_columns().len()
            }

            fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
                let mut idx = offset;
                let mut next = || {
                    let current = idx;
                    idx += 1;
                    current
                };
                Ok(Self {
                    id: Some(row.get(next())?),
                    player_id: row.get(next())?,
                    projection_system_id: row.get(next())?,
                    $($text: row.get(next())?,)*
                    $($flag: row.get(next())?,)*
                    $($stat: row.get(next())?,)*
                })
            }

            fn to_params(&self) -> Vec<&dyn ToSql> {
                let mut values: Vec<&dyn ToSql> = vec![&self.player_id, &self.projection_system_id];
                $(values.push(&self.$text);)*
                $(values.push(&self.$flag);)*
                $(values.push(&self.$stat);)*
                values
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.id {
                    Some(id) => write!(
                        f,
                        "<{} {} (Player {}, ProjectionSystem {})>",
                        stringify!($name),
                        id,
                        self.player_id,
                        self.projection_system_id
                    ),
                    None => write!(
                        f,
                        "<{} unsaved (Player {}, ProjectionSystem {})>",
                        stringify!($name),
                        self.player_id,
                        self.projection_system_id
                    ),
                }
            }
        }
    };
}

projection_table! {
    /// One projection system's offensive line for one player.
    pub struct BatterProjection => "batter_projections" as Batter {
        text { team(3), positions(20), dc_fl(2) }
        flags { rookie }
        stats {
        g, ab, pa, h, h1b, h2b, h3b, hr,
        r, rbi, bb, ibb, k, hbp, sf, sh,
        gdp, sb, cs, avg,

        gb, fb, ld, iffb,

        pitches, balls, strikes,

        ifh, bu, buh,

        bb_pct, k_pct, bb_k,

        obp, slg, ops, iso, babip,

        gb_fb, ld_pct, gb_pct, fb_pct, hr_fb, iffb_pct, ifh_pct, buh_pct,

        woba, wraa, wrc,

        bat, fld, rep, pos,

        rar, war, dollars,

        spd, wrc_plus, wpa, wpa_minus, wpa_plus, re24, rew, pli,
        phli, ph, wpali, clutch,

        // Pitch-type block. Upstream repeats fb_pct here; the batted-ball
        // column above is the single fb_pct kept.
        fbv, sl_pct, slv, ct_pct, ctv, cb_pct, cbv, ch_pct,
        chv, sf_pct, sfv, kn_pct, knv,

        xx_pct, po_pct,

        wfb, wsl, wct, wcb, wch, wsf, wkn, wfbc,
        wslc, wctc, wcbc, wchc, wsfc, wknc,

        oswing_pct, zswing_pct, swing_pct, ocontact_pct, zcontact_pct, contact_pct, zone_pct, fstrike_pct,
        swstr_pct,

        bsr,

        fa_pct_pfx, ft_pct_pfx, fc_pct_pfx, fs_pct_pfx, fo_pct_pfx, si_pct_pfx, sl_pct_pfx, cu_pct_pfx,
        kc_pct_pfx, ep_pct_pfx, ch_pct_pfx, sc_pct_pfx, kn_pct_pfx, un_pct_pfx,

        vfa_pfx, vft_pfx, vfc_pfx, vfs_pfx, vfo_pfx, vsi_pfx, vsl_pfx, vcu_pfx,
        vkc_pfx, vep_pfx, vch_pfx, vsc_pfx, vkn_pfx,

        fa_x_pfx, ft_x_pfx, fc_x_pfx, fs_x_pfx, fo_x_pfx, si_x_pfx, sl_x_pfx, cu_x_pfx,
        kc_x_pfx, ep_x_pfx, ch_x_pfx, sc_x_pfx, kn_x_pfx,

        fa_z_pfx, ft_z_pfx, fc_z_pfx, fs_z_pfx, fo_z_pfx, si_z_pfx, sl_z_pfx, cu_z_pfx,
        kc_z_pfx, ep_z_pfx, ch_z_pfx, sc_z_pfx, kn_z_pfx,

        wfa_pfx, wft_pfx, wfc_pfx, wfs_pfx, wfo_pfx, wsi_pfx, wsl_pfx, wcu_pfx,
        wkc_pfx, wep_pfx, wch_pfx, wsc_pfx, wkn_pfx,

        wfa_c_pfx, wft_c_pfx, wfc_c_pfx, wfs_c_pfx, wfo_c_pfx, wsi_c_pfx, wsl_c_pfx, wcu_c_pfx,
        wkc_c_pfx, wep_c_pfx, wch_c_pfx, wsc_c_pfx, wkn_c_pfx,

        oswing_pct_pfx, zswing_pct_pfx, swing_pct_pfx, ocontact_pct_pfx, zcontact_pct_pfx, contact_pct_pfx, zone_pct_pfx,

        pace, defense, wsb, ubr, off, lg,
        }
    }
}

projection_table! {
    /// One projection system's pitching line for one player.
    pub struct PitcherProjection => "pitcher_projections" as Pitcher {
        text { team(3), dc_fl(2) }
        flags { rookie }
        stats {
        w, l, era, g, gs, cg, sho, sv,
        bs, ip, tbf, h, r, er, hr, bb,
        ibb, hbp, wp, bk, k,

        gb, fb, ld, iffb,

        balls, strikes, pitches,

        rs, ifh, bu, buh,

        k9, bb9, k_bb, h9, hr9, avg, whip, babip,
        lob_pct, fip,

        gb_fb, ld_pct, gb_pct, fb_pct, iffb_pct, hr_fb, ifh_pct, buh_pct,

        starting, start_ip, relieving, relief_ip,

        rar, war, dollars,

        tera, xfip,

        wpa, wpa_minus, wpa_plus, re24, rew, pli, inli, gmli,
        exli, pulls, wpali, clutch,

        // Pitch-type block. Upstream repeats fb_pct here; the batted-ball
        // column above is the single fb_pct kept.
        fbv, sl_pct, slv, ct_pct, ctv, cb_pct, cbv, ch_pct,
        chv, sf_pct, sfv, kn_pct, knv,

        xx_pct, po_pct,

        wfb, wsl, wct, wcb, wch, wsf, wkn, wfbc,
        wslc, wctc, wcbc, wchc, wsfc, wknc,

        oswing_pct, zswing_pct, swing_pct, ocontact_pct, zcontact_pct, contact_pct, zone_pct, fstrike_pct,
        swstr_pct,

        hld, sd, md,

        era_minus, fip_minus, xfip_minus,

        k_pct, bb_pct, siera, rs9, ef,

        fa_pct_pfx, ft_pct_pfx, fc_pct_pfx, fs_pct_pfx, fo_pct_pfx, si_pct_pfx, sl_pct_pfx, cu_pct_pfx,
        kc_pct_pfx, ep_pct_pfx, ch_pct_pfx, sc_pct_pfx, kn_pct_pfx, un_pct_pfx,

        vfa_pfx, vft_pfx, vfc_pfx, vfs_pfx, vfo_pfx, vsi_pfx, vsl_pfx, vcu_pfx,
        vkc_pfx, vep_pfx, vch_pfx, vsc_pfx, vkn_pfx,

        fa_x_pfx, ft_x_pfx, fc_x_pfx, fs_x_pfx, fo_x_pfx, si_x_pfx, sl_x_pfx, cu_x_pfx,
        kc_x_pfx, ep_x_pfx, ch_x_pfx, sc_x_pfx, kn_x_pfx,

        fa_z_pfx, ft_z_pfx, fc_z_pfx, fs_z_pfx, fo_z_pfx, si_z_pfx, sl_z_pfx, cu_z_pfx,
        kc_z_pfx, ep_z_pfx, ch_z_pfx, sc_z_pfx, kn_z_pfx,

        wfa_pfx, wft_pfx, wfc_pfx, wfs_pfx, wfo_pfx, wsi_pfx, wsl_pfx, wcu_pfx,
        wkc_pfx, wep_pfx, wch_pfx, wsc_pfx, wkn_pfx,

        wfa_c_pfx, wft_c_pfx, wfc_c_pfx, wfs_c_pfx, wfo_c_pfx, wsi_c_pfx, wsl_c_pfx, wcu_c_pfx,
        wkc_c_pfx, wep_c_pfx, wch_c_pfx, wsc_c_pfx, wkn_c_pfx,

        oswing_pct_pfx, zswing_pct_pfx, swing_pct_pfx, ocontact_pct_pfx, zcontact_pct_pfx, contact_pct_pfx, zone_pct_pfx,

        pace, ra9_war,

        bip_wins, lob_wins, fdp_wins,
        }
    }
}

#[cfg(test)]
mod tests;
