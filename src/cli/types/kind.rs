//! Projection kind selector.

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects the batter or pitcher projection relation of a player.
///
/// # Examples
///
/// ```rust
/// use baseball_projections::ProjectionKind;
///
/// assert_eq!("batter".parse::<ProjectionKind>().unwrap(), ProjectionKind::Batter);
/// assert_eq!(ProjectionKind::Pitcher.to_string(), "pitcher");
/// assert!("fielder".parse::<ProjectionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    Batter,
    Pitcher,
}

impl ProjectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionKind::Batter => "batter",
            ProjectionKind::Pitcher => "pitcher",
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionKind {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "batter" => Ok(ProjectionKind::Batter),
            "pitcher" => Ok(ProjectionKind::Pitcher),
            _ => Err(ProjectionError::invalid_argument(format!(
                "projection kind was '{}', must be 'batter' or 'pitcher'",
                s
            ))),
        }
    }
}
