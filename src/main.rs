//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use lol_rank::{
    cli::{Commands, GetCmd, LolRank},
    commands::{
        cache::handle_clear_cache,
        champions::handle_champions,
        lookup::{handle_lookup, LookupParams},
    },
    config::{db_path_from_env, Config, Endpoints, DEFAULT_TIMEOUT},
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let app = LolRank::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Lookup {
                name,
                tag,
                region,
                refresh,
                json,
                no_match_details,
                no_season_history,
            } => {
                let mut config = Config::from_env(app.api_key)?;
                config.fetch.collect_match_details = !no_match_details;
                config.collect_season_history = !no_season_history;
                handle_lookup(
                    &config,
                    LookupParams {
                        game_name: name,
                        tag_line: tag,
                        region,
                        refresh,
                        as_json: json,
                    },
                )
                .await?
            }

            GetCmd::Champions => handle_champions(&Endpoints::default(), DEFAULT_TIMEOUT).await?,

            GetCmd::ClearCache => handle_clear_cache(&db_path_from_env()?)?,
        },
    }

    Ok(())
}
