//! Integration tests for command helpers

use baseball_projections::{
    commands::{open_database, resolve_database_path},
    storage::IdentityMatch,
    IdField, DB_PATH_ENV_VAR,
};
use std::path::PathBuf;

// Env var tests share process state, so they run inside one test.
#[test]
fn test_resolve_database_path_precedence() {
    std::env::remove_var(DB_PATH_ENV_VAR);

    let flag = PathBuf::from("/tmp/from-flag.db");
    assert_eq!(resolve_database_path(Some(flag.clone())).unwrap(), flag);

    std::env::set_var(DB_PATH_ENV_VAR, "/tmp/from-env.db");
    assert_eq!(
        resolve_database_path(None).unwrap(),
        PathBuf::from("/tmp/from-env.db")
    );
    assert_eq!(resolve_database_path(Some(flag.clone())).unwrap(), flag);

    // Blank values fall through to the default location
    std::env::set_var(DB_PATH_ENV_VAR, "  ");
    if let Ok(path) = resolve_database_path(None) {
        assert!(path.ends_with("baseball-projections/projections.db"));
    }

    std::env::remove_var(DB_PATH_ENV_VAR);
}

#[test]
fn test_open_database_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projections.db");

    let db = open_database(Some(path.clone())).unwrap();
    assert!(path.exists());
    assert_eq!(
        db.find_player(IdField::FgId, "10155").unwrap(),
        IdentityMatch::NotFound
    );
}
