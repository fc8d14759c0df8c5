//! Champion catalog: numeric champion key -> display name and symbolic id.
//!
//! Loaded once at startup from Data Dragon and shared read-only. Loading never
//! fails: on any error the catalog is empty, keeps the fallback version and
//! records why in [`CatalogStatus::Degraded`].

use std::collections::HashMap;

use reqwest::Client;
use tracing::{info, warn};

use crate::config::Endpoints;
use crate::core::build_url;
use crate::riot::types::ChampionDataEnvelope;
use crate::Result;

/// Data Dragon version used when the versions feed is unreachable.
pub const FALLBACK_DDRAGON_VERSION: &str = "14.24.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionInfo {
    pub name: String,
    pub id: String,
}

impl ChampionInfo {
    /// Placeholder for keys missing from the catalog.
    pub fn unknown(key: i64) -> Self {
        Self {
            name: format!("Champion {key}"),
            id: "Unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loaded,
    Degraded(String),
}

#[derive(Debug, Clone)]
pub struct ChampionCatalog {
    version: String,
    champions: HashMap<i64, ChampionInfo>,
    status: CatalogStatus,
}

impl ChampionCatalog {
    pub fn new(version: impl Into<String>, champions: HashMap<i64, ChampionInfo>) -> Self {
        Self {
            version: version.into(),
            champions,
            status: CatalogStatus::Loaded,
        }
    }

    /// Empty catalog on the fallback version.
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            version: FALLBACK_DDRAGON_VERSION.to_string(),
            champions: HashMap::new(),
            status: CatalogStatus::Degraded(reason.into()),
        }
    }

    /// Fetch the latest version label, then that version's champion table.
    pub async fn load(client: &Client, endpoints: &Endpoints) -> Self {
        let version = match fetch_latest_version(client, endpoints).await {
            Ok(Some(version)) => version,
            Ok(None) => {
                warn!("versions feed was empty, using fallback {FALLBACK_DDRAGON_VERSION}");
                FALLBACK_DDRAGON_VERSION.to_string()
            }
            Err(e) => {
                warn!(error = %e, "could not fetch versions feed, using fallback {FALLBACK_DDRAGON_VERSION}");
                FALLBACK_DDRAGON_VERSION.to_string()
            }
        };

        match fetch_champions(client, endpoints, &version).await {
            Ok(champions) => {
                info!(version = %version, champions = champions.len(), "champion catalog loaded");
                Self::new(version, champions)
            }
            Err(e) => {
                warn!(error = %e, version = %version, "champion catalog unavailable, names will be placeholders");
                Self {
                    version,
                    ..Self::degraded(e.to_string())
                }
            }
        }
    }

    /// Never fails: unknown keys get a synthesized placeholder.
    pub fn lookup(&self, key: i64) -> ChampionInfo {
        self.champions
            .get(&key)
            .cloned()
            .unwrap_or_else(|| ChampionInfo::unknown(key))
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

async fn fetch_latest_version(client: &Client, endpoints: &Endpoints) -> Result<Option<String>> {
    let url = build_url(&endpoints.ddragon_base, &["api", "versions.json"])?;
    let versions = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<String>>()
        .await?;
    Ok(versions.into_iter().next())
}

async fn fetch_champions(
    client: &Client,
    endpoints: &Endpoints,
    version: &str,
) -> Result<HashMap<i64, ChampionInfo>> {
    let url = build_url(
        &endpoints.ddragon_base,
        &["cdn", version, "data", "en_US", "champion.json"],
    )?;
    let envelope = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<ChampionDataEnvelope>()
        .await?;

    Ok(envelope
        .data
        .into_values()
        .filter_map(|entry| {
            let key = entry.key.parse::<i64>().ok()?;
            Some((
                key,
                ChampionInfo {
                    name: entry.name,
                    id: entry.id,
                },
            ))
        })
        .collect())
}
