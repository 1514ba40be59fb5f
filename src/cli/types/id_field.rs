//! External identifier namespaces a player can be looked up by.

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the identifier columns on `players`.
///
/// The first three are canonical: the store holds at most one player per
/// non-null value of each. The rest are cross-references into other datasets
/// and carry no uniqueness guarantee.
///
/// # Examples
///
/// ```rust
/// use baseball_projections::IdField;
///
/// let field: IdField = "fg_id".parse().unwrap();
/// assert_eq!(field, IdField::FgId);
/// assert!(field.is_canonical());
/// assert!(!IdField::BrId.is_canonical());
/// assert!("yahoo_id".parse::<IdField>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdField {
    /// Chadwick Bureau register key
    ChadwickId,
    /// MLB Advanced Media player ID
    MlbId,
    /// FanGraphs player ID
    FgId,
    RetrosheetId,
    /// Baseball-Reference ID
    BrId,
    /// Baseball Prospectus ID
    BpId,
    LahmanId,
    SteamerId,
}

impl IdField {
    /// Every identifier column, canonical fields first.
    pub const ALL: [IdField; 8] = [
        IdField::ChadwickId,
        IdField::MlbId,
        IdField::FgId,
        IdField::RetrosheetId,
        IdField::BrId,
        IdField::BpId,
        IdField::LahmanId,
        IdField::SteamerId,
    ];

    /// The uniquely-constrained lookup keys, in reconciliation order.
    pub fn canonical() -> &'static [IdField] {
        &Self::ALL[..3]
    }

    pub fn secondary() -> &'static [IdField] {
        &Self::ALL[3..]
    }

    /// Column name in the `players` table.
    pub fn column(&self) -> &'static str {
        match self {
            IdField::ChadwickId => "chadwick_id",
            IdField::MlbId => "mlb_id",
            IdField::FgId => "fg_id",
            IdField::RetrosheetId => "retrosheet_id",
            IdField::BrId => "br_id",
            IdField::BpId => "bp_id",
            IdField::LahmanId => "lahman_id",
            IdField::SteamerId => "steamer_id",
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, IdField::ChadwickId | IdField::MlbId | IdField::FgId)
    }
}

impl fmt::Display for IdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for IdField {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        IdField::ALL
            .iter()
            .copied()
            .find(|field| field.column() == s)
            .ok_or_else(|| {
                ProjectionError::invalid_argument(format!(
                    "unknown id field '{}', expected one of: {}",
                    s,
                    IdField::ALL
                        .iter()
                        .map(|f| f.column())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// Descriptive name columns on `players`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    LastName,
    FirstName,
}

impl NameField {
    pub const ALL: [NameField; 2] = [NameField::LastName, NameField::FirstName];

    pub fn column(&self) -> &'static str {
        match self {
            NameField::LastName => "last_name",
            NameField::FirstName => "first_name",
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
