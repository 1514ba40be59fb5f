//! Integration tests for player reports

use baseball_projections::{storage::*, IdField, Season};

fn setup_trout() -> (ProjectionDatabase, Player) {
    let mut db = ProjectionDatabase::open_in_memory().unwrap();

    let mut trout = NewPlayer::default();
    trout.ids.fg_id = Some("10155".to_string());
    trout.last_name = Some("Trout".to_string());
    trout.first_name = Some("Mike".to_string());
    let trout = db.insert_player(&trout).unwrap();

    let steamer = db
        .insert_projection_system("Steamer", Season::new(2024), false)
        .unwrap();
    let mut line = BatterProjection::new(trout.id, steamer.id);
    line.hr = Some(32.0);
    line.obp = Some(0.410);
    db.insert_batter_projection(&line).unwrap();

    (db, trout)
}

#[test]
fn test_report_for_batter_only() {
    let (db, _) = setup_trout();
    let player = db
        .find_player(IdField::FgId, "10155")
        .unwrap()
        .into_unique()
        .unwrap();
    let report = db.player_report(&player).unwrap();

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines[0],
        format!("Trout, Mike (id: {}, FG ID: 10155)", player.id)
    );
    assert_eq!(lines[1], "");
    assert_eq!(
        lines[2],
        format!("{}Projection :   OBP   SLG  HR   R RBI  SB", " ".repeat(16))
    );
    assert_eq!(
        lines[3],
        format!("{}Steamer, 2024 : 0.410 -----  32 --- --- ---", " ".repeat(13))
    );
    assert_eq!(lines[4], "No pitcher projections");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_report_orders_by_system_then_year() {
    let (mut db, trout) = setup_trout();
    for (name, year) in [("ZiPS", 2024), ("Steamer", 2023), ("ATC", 2024)] {
        let system = db
            .insert_projection_system(name, Season::new(year), false)
            .unwrap();
        db.insert_batter_projection(&BatterProjection::new(trout.id, system.id))
            .unwrap();
    }

    let report = db.player_report(&trout).unwrap();
    let rows: Vec<&str> = report
        .lines()
        .skip(3)
        .take(4)
        .map(|line| line.split(" :").next().unwrap().trim_start())
        .collect();
    assert_eq!(
        rows,
        vec!["ATC, 2024", "Steamer, 2023", "Steamer, 2024", "ZiPS, 2024"]
    );
}

#[test]
fn test_report_is_deterministic() {
    let (db, trout) = setup_trout();
    assert_eq!(
        db.player_report(&trout).unwrap(),
        db.player_report(&trout).unwrap()
    );
}

#[test]
fn test_report_with_no_projections() {
    let mut db = ProjectionDatabase::open_in_memory().unwrap();
    let player = db.insert_player(&NewPlayer::default()).unwrap();

    let report = db.player_report(&player).unwrap();
    assert_eq!(
        report,
        format!(
            "-, - (id: {}, FG ID: -)\n\nNo batter projections\nNo pitcher projections\n",
            player.id
        )
    );
}
