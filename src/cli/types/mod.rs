//! Type-safe wrappers and enums for projection store data.

pub mod id_field;
pub mod ids;
pub mod kind;
pub mod time;

#[cfg(test)]
mod tests;

pub use id_field::{IdField, NameField};
pub use ids::{PlayerId, ProjectionId, SystemId};
pub use kind::ProjectionKind;
pub use time::Season;
