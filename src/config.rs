//! Runtime configuration.
//!
//! The API key has no default: it must come from the environment (or a
//! `.env` file loaded by the binary) or be passed explicitly.

use std::path::PathBuf;
use std::time::Duration;

use dirs::cache_dir;

use crate::error::{RankError, Result};

pub const API_KEY_ENV_VAR: &str = "RIOT_API_KEY";
pub const DB_PATH_ENV_VAR: &str = "LOL_RANK_DB_PATH";

pub const DEFAULT_MATCH_COUNT: u32 = 30;
pub const DEFAULT_CONCURRENCY: usize = 8;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Upstream hosts. `{host}` in `riot_base` is replaced with the platform
/// (`euw1`) or routing bucket (`europe`) for each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub riot_base: String,
    pub ddragon_base: String,
    pub history_base: String,
}

impl Endpoints {
    /// Point every upstream at one base URL, e.g. a local mock server.
    pub fn single_host(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            riot_base: base.clone(),
            ddragon_base: base.clone(),
            history_base: base,
        }
    }

    pub fn riot_host(&self, host: &str) -> String {
        self.riot_base.replace("{host}", host)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            riot_base: "https://{host}.api.riotgames.com".to_string(),
            ddragon_base: "https://ddragon.leagueoflegends.com".to_string(),
            history_base: "https://www.leagueofgraphs.com".to_string(),
        }
    }
}

/// Knobs for the ranked stats fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Ranked match ids requested from the match list endpoint.
    pub match_count: u32,
    /// Match detail requests in flight at once.
    pub concurrency: usize,
    /// Keep per-match detail (builds, runes, all ten participants).
    pub collect_match_details: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            match_count: DEFAULT_MATCH_COUNT,
            concurrency: DEFAULT_CONCURRENCY,
            collect_match_details: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub db_path: PathBuf,
    pub endpoints: Endpoints,
    pub fetch: FetchOptions,
    pub timeout: Duration,
    /// Attach scraped season history to lookups.
    pub collect_season_history: bool,
}

impl Config {
    /// Defaults around an explicit API key and database path.
    pub fn new(api_key: impl Into<String>, db_path: PathBuf) -> Self {
        Self {
            api_key: api_key.into(),
            db_path,
            endpoints: Endpoints::default(),
            fetch: FetchOptions::default(),
            timeout: DEFAULT_TIMEOUT,
            collect_season_history: true,
        }
    }

    /// Build from an explicit key or `RIOT_API_KEY`, plus optional
    /// `LOL_RANK_DB_PATH`.
    pub fn from_env(api_key: Option<String>) -> Result<Self> {
        let api_key = resolve_api_key(api_key)?;
        Ok(Self::new(api_key, db_path_from_env()?))
    }
}

/// `LOL_RANK_DB_PATH` when set, else [`default_db_path`].
pub fn db_path_from_env() -> Result<PathBuf> {
    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => default_db_path(),
    }
}

/// Resolve the API key from an explicit value or the environment.
pub fn resolve_api_key(explicit: Option<String>) -> Result<String> {
    explicit
        .or_else(|| std::env::var(API_KEY_ENV_VAR).ok())
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| RankError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })
}

/// Path: ~/.cache/lol-rank/players.db
pub fn default_db_path() -> Result<PathBuf> {
    let cache_dir = cache_dir().ok_or_else(|| RankError::Cache {
        message: "Could not determine cache directory".to_string(),
    })?;
    Ok(cache_dir.join("lol-rank").join("players.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_explicit_wins() {
        let key = resolve_api_key(Some("  RGAPI-explicit ".to_string())).unwrap();
        assert_eq!(key, "RGAPI-explicit");
    }

    #[test]
    fn test_resolve_api_key_rejects_blank() {
        let err = resolve_api_key(Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, RankError::MissingApiKey { .. }));
        assert!(err.to_string().contains(API_KEY_ENV_VAR));
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.riot_host("europe"),
            "https://europe.api.riotgames.com"
        );
        assert_eq!(endpoints.riot_host("euw1"), "https://euw1.api.riotgames.com");
    }

    #[test]
    fn test_single_host_endpoints() {
        let endpoints = Endpoints::single_host("http://127.0.0.1:9999/");
        assert_eq!(endpoints.riot_host("europe"), "http://127.0.0.1:9999");
        assert_eq!(endpoints.ddragon_base, "http://127.0.0.1:9999");
        assert_eq!(endpoints.history_base, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new("key", PathBuf::from("/tmp/x.db"));
        assert_eq!(config.fetch.match_count, 30);
        assert_eq!(config.fetch.concurrency, 8);
        assert!(config.fetch.collect_match_details);
        assert!(config.collect_season_history);
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_default_db_path() {
        if let Ok(path) = default_db_path() {
            assert!(path.ends_with("lol-rank/players.db"));
        }
    }
}
