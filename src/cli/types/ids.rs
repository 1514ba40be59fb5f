//! Row ID types for the projection store.

use crate::error::{ProjectionError, Result};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generates a newtype over a SQLite `INTEGER PRIMARY KEY`.
macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ProjectionError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.parse()?))
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                self.0.to_sql()
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

row_id!(
    /// Primary key of a row in `players`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baseball_projections::PlayerId;
    ///
    /// let id = PlayerId::new(42);
    /// assert_eq!(id.as_i64(), 42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    PlayerId
);

row_id!(
    /// Primary key of a row in `projection_systems`.
    SystemId
);

row_id!(
    /// Primary key of a row in `batter_projections` or `pitcher_projections`.
    ProjectionId
);
