//! Storage layer for the baseball projections store
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `fields`: Declarative column tables for the projection relations
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Basic create/read operations
//! - `identity`: Player lookup by external identifiers
//! - `accessor`: Filtered projection retrieval

pub mod accessor;
pub mod fields;
pub mod identity;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use accessor::{ProjectionFilter, ProjectionMatch};
pub use identity::IdentityMatch;
pub use models::*;
pub use schema::ProjectionDatabase;
