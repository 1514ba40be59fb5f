//! Unit tests for the generated projection tables

use super::*;
use std::collections::HashSet;

#[test]
fn test_column_counts() {
    assert_eq!(BatterProjection::STAT_COLUMNS.len(), 199);
    assert_eq!(PitcherProjection::STAT_COLUMNS.len(), 211);
    assert_eq!(BatterProjection::TEXT_COLUMNS, &["team", "positions", "dc_fl"]);
    assert_eq!(PitcherProjection::TEXT_COLUMNS, &["team", "dc_fl"]);
    assert_eq!(BatterProjection::FLAG_COLUMNS, &["rookie"]);
}

#[test]
fn test_stat_columns_are_unique() {
    for columns in [BatterProjection::STAT_COLUMNS, PitcherProjection::STAT_COLUMNS] {
        let unique: HashSet<_> = columns.iter().collect();
        assert_eq!(unique.len(), columns.len());
        assert_eq!(columns.iter().filter(|c| **c == "fb_pct").count(), 1);
    }
}

#[test]
fn test_set_and_read_stat_by_name() {
    let mut proj = BatterProjection::new(PlayerId::new(1), SystemId::new(2));
    assert_eq!(proj.stat("hr").unwrap(), None);

    proj.set_stat("hr", Some(32.0)).unwrap();
    proj.set_stat("obp", Some(0.410)).unwrap();

    assert_eq!(proj.hr, Some(32.0));
    assert_eq!(proj.stat("obp").unwrap(), Some(0.410));

    proj.set_stat("hr", None).unwrap();
    assert_eq!(proj.hr, None);
}

#[test]
fn test_unknown_stat_column_is_invalid_argument() {
    let mut proj = PitcherProjection::new(PlayerId::new(1), SystemId::new(2));

    // obp is a batter column only
    match proj.stat("obp") {
        Err(ProjectionError::InvalidArgument { message }) => {
            assert!(message.contains("pitcher_projections"));
            assert!(message.contains("obp"));
        }
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
    assert!(proj.set_stat("not_a_column", Some(1.0)).is_err());
}

#[test]
fn test_negative_values_are_accepted() {
    let mut proj = PitcherProjection::new(PlayerId::new(1), SystemId::new(2));
    proj.set_stat("war", Some(-1.5)).unwrap();
    assert_eq!(proj.stat("war").unwrap(), Some(-1.5));
}

#[test]
fn test_insert_sql_matches_params() {
    let proj = BatterProjection::new(PlayerId::new(1), SystemId::new(2));
    let sql = BatterProjection::insert_sql();
    let placeholders = sql.matches('?').count();

    assert_eq!(placeholders, proj.to_params().len());
    assert_eq!(placeholders + 1, BatterProjection::column_count());
    assert!(sql.starts_with("INSERT INTO batter_projections (player_id, projection_system_id, team"));
}

#[test]
fn test_select_columns_are_prefixed() {
    let select = PitcherProjection::select_columns("pp");
    let columns: Vec<_> = select.split(", ").collect();

    assert_eq!(columns.len(), PitcherProjection::column_count());
    assert_eq!(columns[0], "pp.id");
    assert!(columns.iter().all(|c| c.starts_with("pp.")));
}

#[test]
fn test_create_table_sql() {
    let sql = PitcherProjection::create_table_sql();
    assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS pitcher_projections"));
    assert!(sql.contains("UNIQUE (player_id, projection_system_id)"));
    assert!(sql.contains("team VARCHAR(3)"));
    assert!(sql.contains("era REAL"));
    assert!(sql.contains("rookie INTEGER"));
}

#[test]
fn test_display() {
    let mut proj = BatterProjection::new(PlayerId::new(3), SystemId::new(4));
    assert_eq!(
        proj.to_string(),
        "<BatterProjection unsaved (Player 3, ProjectionSystem 4)>"
    );

    proj.id = Some(ProjectionId::new(12));
    assert_eq!(
        proj.to_string(),
        "<BatterProjection 12 (Player 3, ProjectionSystem 4)>"
    );
}

#[test]
fn test_kind_constants() {
    assert_eq!(BatterProjection::KIND, ProjectionKind::Batter);
    assert_eq!(PitcherProjection::TABLE, "pitcher_projections");
}
