//! Ranked stats fetcher.
//!
//! Runs the upstream stages in order for one player:
//!
//! 1. **Identity**: Riot ID -> PUUID. The only fatal stage.
//! 2. **Profile**: level and icon.
//! 3. **Ranked entries**: one record per ranked queue.
//! 4. **Match ids**: recent ranked matches on the routing bucket.
//! 5. **Match detail**: fetched concurrently, then aggregated in match-id order.
//!
//! Stages 2-5 degrade independently: a failure logs a warning and leaves the
//! matching fields empty while the snapshot still reports success.

use std::sync::Arc;

use futures_util::{stream, StreamExt};
use tracing::{debug, info, warn};

use crate::cli::types::{PlayerKey, Region, Routing};
use crate::config::FetchOptions;
use crate::core::unix_now;
use crate::error::RankError;
use crate::models::PlayerSnapshot;
use crate::riot::champions::ChampionCatalog;
use crate::riot::compute::{analyze_matches, ranked_entry};
use crate::riot::http::RiotClient;
use crate::riot::types::MatchDto;
use crate::Result;

pub struct RankedStatsFetcher {
    riot: RiotClient,
    catalog: Arc<ChampionCatalog>,
    options: FetchOptions,
}

impl RankedStatsFetcher {
    pub fn new(riot: RiotClient, catalog: Arc<ChampionCatalog>, options: FetchOptions) -> Self {
        Self {
            riot,
            catalog,
            options,
        }
    }

    pub fn catalog(&self) -> &ChampionCatalog {
        &self.catalog
    }

    /// Fetch a fresh snapshot.
    ///
    /// # Errors
    ///
    /// [`RankError::PlayerNotFound`] when the Riot ID does not resolve. Later
    /// stages never fail the call.
    pub async fn fetch(
        &self,
        game_name: &str,
        tag_line: &str,
        region: &Region,
    ) -> Result<PlayerSnapshot> {
        let requested = PlayerKey::new(game_name, tag_line, region);

        let account = match self.riot.account_by_riot_id(game_name, tag_line).await {
            Ok(account) => account,
            Err(e) => {
                info!(player = %requested, error = %e, "riot id did not resolve");
                return Err(RankError::PlayerNotFound);
            }
        };
        let puuid = account.puuid;

        let mut snapshot = PlayerSnapshot::new(
            &account.game_name,
            &account.tag_line,
            region.clone(),
            self.catalog.version(),
            unix_now()?,
        );
        snapshot.player = Some(format!("{}#{}", account.game_name, account.tag_line));
        snapshot.puuid = Some(puuid.clone());

        match self.riot.summoner_by_puuid(region, &puuid).await {
            Ok(summoner) => {
                snapshot.level = Some(summoner.summoner_level);
                snapshot.profile_icon = Some(summoner.profile_icon_id);
            }
            Err(e) => warn!(player = %requested, stage = "summoner", error = %e, "stage failed"),
        }

        match self.riot.league_entries_by_puuid(region, &puuid).await {
            Ok(entries) => snapshot.ranked = entries.iter().map(ranked_entry).collect(),
            Err(e) => {
                warn!(player = %requested, stage = "league entries", error = %e, "stage failed")
            }
        }

        let routing = region.routing();
        let match_ids = match self
            .riot
            .ranked_match_ids(routing, &puuid, self.options.match_count)
            .await
        {
            Ok(ids) => ids,
            Err(e) => {
                warn!(player = %requested, stage = "match ids", error = %e, "stage failed");
                snapshot.success = true;
                return Ok(snapshot);
            }
        };

        let matches = self.fetch_matches(routing, &match_ids).await;
        debug!(
            player = %requested,
            requested = match_ids.len(),
            fetched = matches.len(),
            "match details fetched"
        );

        let analysis = analyze_matches(
            &puuid,
            &matches,
            &self.catalog,
            self.options.collect_match_details,
        );
        snapshot.top_champions = analysis.top_champions;
        snapshot.side_stats = Some(analysis.side_stats);
        snapshot.match_history = analysis.match_history;
        snapshot.success = true;

        Ok(snapshot)
    }

    /// Fetch match details with at most `concurrency` requests in flight.
    ///
    /// Failed matches are dropped; the rest come back in `match_ids` order.
    async fn fetch_matches(
        &self,
        routing: Routing,
        match_ids: &[String],
    ) -> Vec<(String, MatchDto)> {
        let mut fetched: Vec<(usize, String, MatchDto)> = stream::iter(match_ids.iter().enumerate())
            .map(|(idx, match_id)| async move {
                match self.riot.match_by_id(routing, match_id).await {
                    Ok(game) => Some((idx, match_id.clone(), game)),
                    Err(e) => {
                        warn!(match_id = %match_id, error = %e, "skipping match");
                        None
                    }
                }
            })
            .buffer_unordered(self.options.concurrency.max(1))
            .filter_map(|result| async move { result })
            .collect()
            .await;

        fetched.sort_by_key(|(idx, _, _)| *idx);
        fetched
            .into_iter()
            .map(|(_, match_id, game)| (match_id, game))
            .collect()
    }
}
