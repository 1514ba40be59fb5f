//! Entry point: parse CLI and dispatch to command handlers.

use baseball_projections::{
    cli::{Cli, Commands},
    commands::{
        find_player::handle_find_player,
        init::handle_init,
        player_report::handle_report,
        projection::{handle_projection, ProjectionParams},
        systems::handle_systems,
    },
};
use clap::Parser;
use env_logger::Env;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let app = Cli::parse();

    match app.command {
        Commands::Init => handle_init(app.db)?,

        Commands::FindPlayer { lookup, json } => {
            handle_find_player(app.db, lookup.id_type, lookup.id, json)?
        }

        Commands::Projection {
            lookup,
            kind,
            system,
            year,
            json,
        } => handle_projection(ProjectionParams {
            db: app.db,
            id_type: lookup.id_type,
            id: lookup.id,
            kind,
            system,
            year,
            as_json: json,
        })?,

        Commands::Report { lookup } => handle_report(app.db, lookup.id_type, lookup.id)?,

        Commands::Systems { json } => handle_systems(app.db, json)?,
    }

    Ok(())
}
