//! Riot API client.
//!
//! Every call goes through `error_for_status`, so a non-2xx response, a
//! timeout and a transport failure all surface as [`RankError::Http`]. The
//! fetcher decides per stage whether that is fatal.
//!
//! [`RankError::Http`]: crate::error::RankError::Http

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli::types::{Puuid, Region, Routing};
use crate::config::Endpoints;
use crate::core::{build_client, build_url, riot_header_map};
use crate::riot::types::{AccountDto, LeagueEntryDto, MatchDto, SummonerDto};
use crate::Result;


/// Continental cluster used for account lookups; accounts are global.
pub const ACCOUNT_ROUTING: Routing = Routing::Europe;

pub struct RiotClient {
    client: Client,
    endpoints: Endpoints,
}

impl RiotClient {
    pub fn new(api_key: &str, endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let client = build_client(riot_header_map(api_key)?, timeout)?;
        Ok(Self { client, endpoints })
    }

    pub async fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> Result<AccountDto> {
        let url = build_url(
            &self.endpoints.riot_host(ACCOUNT_ROUTING.as_str()),
            &["riot", "account", "v1", "accounts", "by-riot-id", game_name, tag_line],
        )?;
        self.get_json(url).await
    }

    pub async fn summoner_by_puuid(&self, region: &Region, puuid: &Puuid) -> Result<SummonerDto> {
        let url = build_url(
            &self.endpoints.riot_host(region.as_str()),
            &["lol", "summoner", "v4", "summoners", "by-puuid", puuid.as_str()],
        )?;
        self.get_json(url).await
    }

    pub async fn league_entries_by_puuid(
        &self,
        region: &Region,
        puuid: &Puuid,
    ) -> Result<Vec<LeagueEntryDto>> {
        let url = build_url(
            &self.endpoints.riot_host(region.as_str()),
            &["lol", "league", "v4", "entries", "by-puuid", puuid.as_str()],
        )?;
        self.get_json(url).await
    }

    /// Most recent ranked match ids, newest first.
    pub async fn ranked_match_ids(
        &self,
        routing: Routing,
        puuid: &Puuid,
        count: u32,
    ) -> Result<Vec<String>> {
        let mut url = build_url(
            &self.endpoints.riot_host(routing.as_str()),
            &["lol", "match", "v5", "matches", "by-puuid", puuid.as_str(), "ids"],
        )?;
        url.query_pairs_mut()
            .append_pair("type", "ranked")
            .append_pair("count", &count.to_string());
        self.get_json(url).await
    }

    pub async fn match_by_id(&self, routing: Routing, match_id: &str) -> Result<MatchDto> {
        let url = build_url(
            &self.endpoints.riot_host(routing.as_str()),
            &["lol", "match", "v5", "matches", match_id],
        )?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(path = url.path(), "riot request");
        let res = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(res)
    }
}
