//! Integration tests for the projection store

use baseball_projections::{storage::*, IdField, ProjectionError, ProjectionKind, Season};
use chrono::NaiveDate;

fn create_test_db() -> ProjectionDatabase {
    ProjectionDatabase::open_in_memory().unwrap()
}

fn new_player(fg_id: &str, last: &str, first: &str) -> NewPlayer {
    let mut player = NewPlayer::default();
    player.ids.fg_id = Some(fg_id.to_string());
    player.last_name = Some(last.to_string());
    player.first_name = Some(first.to_string());
    player
}

#[test]
fn test_database_creation() {
    let db = create_test_db();
    assert!(db.get_all_players().unwrap().is_empty());
    assert!(db.list_projection_systems().unwrap().is_empty());
}

#[test]
fn test_file_backed_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("projections.db");

    {
        let mut db = ProjectionDatabase::open(&path).unwrap();
        db.insert_player(&new_player("10155", "Trout", "Mike"))
            .unwrap();
        db.insert_projection_system("Steamer", Season::new(2024), false)
            .unwrap();
    }

    // Reopening runs schema setup again without clobbering rows
    let db = ProjectionDatabase::open(&path).unwrap();
    let player = db
        .find_player(IdField::FgId, "10155")
        .unwrap()
        .into_unique()
        .unwrap();
    assert_eq!(player.last_name.as_deref(), Some("Trout"));
    assert_eq!(db.list_projection_systems().unwrap().len(), 1);
}

#[test]
fn test_canonical_ids_are_unique() {
    let mut db = create_test_db();
    db.insert_player(&new_player("10155", "Trout", "Mike"))
        .unwrap();

    let result = db.insert_player(&new_player("10155", "Impostor", "Mike"));
    assert!(matches!(
        result,
        Err(ProjectionError::ConstraintViolation { .. })
    ));
    assert_eq!(db.get_all_players().unwrap().len(), 1);
}

#[test]
fn test_players_without_ids_coexist() {
    let mut db = create_test_db();
    db.insert_player(&NewPlayer::default()).unwrap();
    db.insert_player(&NewPlayer::default()).unwrap();
    assert_eq!(db.get_all_players().unwrap().len(), 2);
}

#[test]
fn test_find_player_by_each_canonical_id() {
    let mut db = create_test_db();
    let mut trout = new_player("10155", "Trout", "Mike");
    trout.ids.mlb_id = Some("545361".to_string());
    trout.ids.chadwick_id = Some("troutmi01".to_string());
    trout.birthdate = NaiveDate::from_ymd_opt(1991, 8, 7);
    let trout = db.insert_player(&trout).unwrap();

    for (field, value) in [
        (IdField::ChadwickId, "troutmi01"),
        (IdField::MlbId, "545361"),
        (IdField::FgId, "10155"),
    ] {
        assert_eq!(
            db.find_player(field, value).unwrap(),
            IdentityMatch::Unique(trout.clone())
        );
    }

    assert_eq!(
        db.find_player(IdField::FgId, "10156").unwrap(),
        IdentityMatch::NotFound
    );
    assert_eq!(trout.age_in_years(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()), Some(32));
}

#[test]
fn test_ambiguous_secondary_id() {
    let mut db = create_test_db();
    for fg_id in ["1", "2"] {
        let mut p = new_player(fg_id, "Smith", "Will");
        p.ids.br_id = Some("smithwi01".to_string());
        db.insert_player(&p).unwrap();
    }

    // Shared secondary IDs come back as data, with every candidate
    match db.find_player(IdField::BrId, "smithwi01").unwrap() {
        IdentityMatch::Ambiguous(players) => {
            let fg_ids: Vec<_> = players
                .iter()
                .map(|p| p.ids.fg_id.as_deref().unwrap())
                .collect();
            assert_eq!(fg_ids, vec!["1", "2"]);
        }
        other => panic!("Expected Ambiguous, got {:?}", other),
    }

    match db.require_player("br_id", "smithwi01") {
        Err(ProjectionError::AmbiguousMatch { count, .. }) => assert_eq!(count, 2),
        other => panic!("Expected AmbiguousMatch, got {:?}", other),
    }
}

#[test]
fn test_require_player_errors() {
    let db = create_test_db();

    assert!(matches!(
        db.require_player("yahoo_id", "1"),
        Err(ProjectionError::InvalidArgument { .. })
    ));
    assert!(matches!(
        db.require_player("fg_id", "1"),
        Err(ProjectionError::NotFound { .. })
    ));
}

#[test]
fn test_projection_pair_is_unique() {
    let mut db = create_test_db();
    let player = db.insert_player(&new_player("10155", "Trout", "Mike")).unwrap();
    let steamer = db
        .insert_projection_system("Steamer", Season::new(2024), false)
        .unwrap();

    let mut line = BatterProjection::new(player.id, steamer.id);
    line.hr = Some(32.0);
    db.insert_batter_projection(&line).unwrap();

    let again = db.insert_batter_projection(&line);
    assert!(matches!(
        again,
        Err(ProjectionError::ConstraintViolation { .. })
    ));

    // The same pair is fine in the pitcher table
    let pitching = PitcherProjection::new(player.id, steamer.id);
    db.insert_pitcher_projection(&pitching).unwrap();
}

#[test]
fn test_projection_requires_existing_player_and_system() {
    let mut db = create_test_db();
    let steamer = db
        .insert_projection_system("Steamer", Season::new(2024), false)
        .unwrap();

    let orphan = BatterProjection::new(baseball_projections::PlayerId::new(999), steamer.id);
    assert!(matches!(
        db.insert_batter_projection(&orphan),
        Err(ProjectionError::ConstraintViolation { .. })
    ));
}

#[test]
fn test_system_name_year_is_unique() {
    let mut db = create_test_db();
    db.insert_projection_system("ZiPS", Season::new(2024), false)
        .unwrap();
    db.insert_projection_system("ZiPS", Season::new(2025), false)
        .unwrap();

    assert!(matches!(
        db.insert_projection_system("ZiPS", Season::new(2024), false),
        Err(ProjectionError::ConstraintViolation { .. })
    ));
}

#[test]
fn test_get_projection_filters() {
    let mut db = create_test_db();
    let player = db.insert_player(&new_player("10155", "Trout", "Mike")).unwrap();

    for (name, year, hr) in [("Steamer", 2024, 32.0), ("Steamer", 2025, 30.0), ("ZiPS", 2024, 29.0)] {
        let system = db
            .insert_projection_system(name, Season::new(year), false)
            .unwrap();
        let mut line = BatterProjection::new(player.id, system.id);
        line.hr = Some(hr);
        db.insert_batter_projection(&line).unwrap();
    }

    let all = db
        .get_projections(&player, ProjectionKind::Batter, &ProjectionFilter::default())
        .unwrap();
    assert_eq!(all.len(), 3);

    let steamer = ProjectionFilter::default().system("Steamer");
    let matched = db
        .get_projection(&player, ProjectionKind::Batter, &steamer)
        .unwrap();
    assert!(matched.single().is_none());
    assert_eq!(matched.into_vec().len(), 2);

    let exact = steamer.year(Season::new(2025));
    let matched = db
        .get_projection(&player, ProjectionKind::Batter, &exact)
        .unwrap();
    let record = matched.single().unwrap();
    assert_eq!(record.projection.stat("hr").unwrap(), Some(30.0));

    let none = db
        .get_projection_by_kind_name(&player, "pitcher", None, None)
        .unwrap();
    assert!(none.into_vec().is_empty());

    assert!(matches!(
        db.get_projection_by_kind_name(&player, "catcher", None, None),
        Err(ProjectionError::InvalidArgument { .. })
    ));
}
