//! League of Legends ranked stats lookup library
//!
//! Resolves a Riot ID to a player, gathers ranked entries and recent ranked
//! matches from the Riot API, derives champion and side statistics, scrapes
//! past season ranks and serves the result through a local SQLite cache.
//!
//! ## Features
//!
//! - **Ranked Stats**: per-queue tier, division, LP and win rate
//! - **Match Analytics**: top champions and blue/red side win rates over the
//!   most recent ranked games, fetched concurrently
//! - **Season History**: end-of-season ranks scraped from a profile page
//! - **Caching**: snapshots and season history persisted per player key, with
//!   forced refresh on demand
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lol_rank::{commands::common::open_lookup_service, config::Config, Region};
//!
//! # async fn example() -> lol_rank::Result<()> {
//! let config = Config::from_env(None)?;
//! let service = open_lookup_service(&config).await?;
//!
//! let snapshot = service
//!     .lookup("Agurin", "EUW", &Region::new("euw1"), false)
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&snapshot)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! A Riot API key is required:
//! ```bash
//! export RIOT_API_KEY=RGAPI-...
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod history;
pub mod models;
pub mod riot;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerKey, Puuid, Region, Routing};
pub use error::{RankError, Result};
pub use models::{PlayerSnapshot, SeasonHistory, SeasonLabel, SeasonRecord};
