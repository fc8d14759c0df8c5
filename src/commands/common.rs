//! Shared setup for commands: everything a lookup needs, built from [`Config`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use tracing::debug;

use crate::commands::lookup::LookupService;
use crate::config::{Config, Endpoints};
use crate::core::build_client;
use crate::history::SeasonHistoryScraper;
use crate::riot::{ChampionCatalog, RankedStatsFetcher, RiotClient};
use crate::storage::PlayerDatabase;
use crate::Result;

/// Load the champion catalog once. Never fails on upstream errors; see
/// [`ChampionCatalog::load`].
pub async fn load_catalog(endpoints: &Endpoints, timeout: Duration) -> Result<ChampionCatalog> {
    let client = build_client(HeaderMap::new(), timeout)?;
    Ok(ChampionCatalog::load(&client, endpoints).await)
}

/// Wire a [`LookupService`] around an already opened database.
pub async fn build_lookup_service(config: &Config, db: PlayerDatabase) -> Result<LookupService> {
    let catalog = Arc::new(load_catalog(&config.endpoints, config.timeout).await?);
    let riot = RiotClient::new(&config.api_key, config.endpoints.clone(), config.timeout)?;
    let fetcher = RankedStatsFetcher::new(riot, catalog, config.fetch.clone());
    let scraper = SeasonHistoryScraper::new(&config.endpoints, config.timeout)?;
    Ok(LookupService::new(
        fetcher,
        scraper,
        db,
        config.collect_season_history,
    ))
}

/// Open the database at `config.db_path` and wire a [`LookupService`].
pub async fn open_lookup_service(config: &Config) -> Result<LookupService> {
    debug!(path = %config.db_path.display(), "opening cache database");
    let db = PlayerDatabase::open(&config.db_path)?;
    build_lookup_service(config, db).await
}
