//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::Region;

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Look up a player's ranked stats, top champions and season history.
    ///
    /// Served from the local cache when possible; `--refresh` always fetches
    /// fresh data from the Riot API.
    Lookup {
        /// Riot ID game name (the part before `#`).
        #[clap(long, short)]
        name: String,

        /// Riot ID tag line (the part after `#`).
        #[clap(long, short)]
        tag: String,

        /// Platform region, e.g. `eun1`, `euw1`, `na1`, `kr`.
        #[clap(long, short, default_value_t = Region::default())]
        region: Region,

        /// Force refresh from the Riot API even if cached data exists
        #[clap(long)]
        refresh: bool,

        /// Output the snapshot as JSON instead of text.
        #[clap(long)]
        json: bool,

        /// Skip per-match builds, runes and participants.
        #[clap(long)]
        no_match_details: bool,

        /// Skip the season history scrape.
        #[clap(long)]
        no_season_history: bool,
    },

    /// Load the champion catalog and print its version and size.
    Champions,

    /// Clear all cached snapshots and season histories.
    ClearCache,
}

#[derive(Debug, Parser)]
#[clap(name = "lol-rank", about = "League of Legends ranked stats lookup")]
pub struct LolRank {
    /// Log at debug level (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// Riot API key (or set `RIOT_API_KEY`).
    #[clap(long, global = true)]
    pub api_key: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the Riot API or the local cache
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
