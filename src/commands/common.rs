//! Shared helpers for commands that look a player up.

use crate::{
    cli::types::IdField,
    storage::{IdentityMatch, Player, ProjectionDatabase},
};
use anyhow::{bail, Result};

/// Resolve the player a command targets, explaining misses and ambiguity.
pub fn lookup_player(db: &ProjectionDatabase, id_type: IdField, id: &str) -> Result<Player> {
    match db.find_player(id_type, id)? {
        IdentityMatch::Unique(player) => Ok(player),
        IdentityMatch::NotFound => bail!("No player with {} = {}", id_type, id),
        IdentityMatch::Ambiguous(players) => {
            let candidates = players
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            bail!(
                "{} players share {} = {}: {}. Resolve the duplicate before querying.",
                players.len(),
                id_type,
                id,
                candidates
            )
        }
    }
}

/// One line summary of a player: label plus every known identifier.
pub fn describe_player(player: &Player) -> String {
    let ids = IdField::ALL
        .iter()
        .filter_map(|field| {
            player
                .external_id(*field)
                .map(|value| format!("{}={}", field, value))
        })
        .collect::<Vec<_>>();

    let mut line = player.to_string();
    if let Some(born) = player.birthdate {
        line.push_str(&format!(" born {}", born));
    }
    if !ids.is_empty() {
        line.push_str(&format!(" [{}]", ids.join(" ")));
    }
    line
}
