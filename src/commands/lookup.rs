//! Lookup orchestration: serve a player from cache or fetch fresh, and keep
//! the season history overlay current.
//!
//! Cache policy per request:
//!
//! - **Hit** (not forced): the stored snapshot is returned with
//!   `from_cache = true` and its stored timestamp. Season history is soft
//!   refreshed and replaces the stored one only when non-empty.
//! - **Miss or forced**: the fetcher runs. On success the season history is
//!   scraped fresh and attached even when empty, and the composite is saved
//!   under the identity the account endpoint returned. Failures are returned
//!   as-is and never cached.

use std::sync::Mutex;

use tracing::{debug, info};

use crate::cli::types::{PlayerKey, Region};
use crate::commands::common::open_lookup_service;
use crate::config::Config;
use crate::error::{RankError, MISSING_INPUT_MESSAGE};
use crate::history::SeasonHistoryScraper;
use crate::models::{PlayerSnapshot, SeasonHistory};
use crate::riot::RankedStatsFetcher;
use crate::storage::PlayerDatabase;
use crate::{core::unix_now, Result};


pub struct LookupService {
    fetcher: RankedStatsFetcher,
    scraper: SeasonHistoryScraper,
    db: Mutex<PlayerDatabase>,
    collect_season_history: bool,
}

impl LookupService {
    pub fn new(
        fetcher: RankedStatsFetcher,
        scraper: SeasonHistoryScraper,
        db: PlayerDatabase,
        collect_season_history: bool,
    ) -> Self {
        Self {
            fetcher,
            scraper,
            db: Mutex::new(db),
            collect_season_history,
        }
    }

    /// Look up one player.
    ///
    /// Blank input and unknown Riot IDs come back as an unsuccessful
    /// snapshot. `Err` is reserved for cache and clock failures.
    pub async fn lookup(
        &self,
        game_name: &str,
        tag_line: &str,
        region: &Region,
        force_refresh: bool,
    ) -> Result<PlayerSnapshot> {
        let game_name = game_name.trim();
        let tag_line = tag_line.trim();
        if game_name.is_empty() || tag_line.is_empty() {
            let err = RankError::InvalidInput {
                message: MISSING_INPUT_MESSAGE.to_string(),
            };
            return self.failure(game_name, tag_line, region, &err);
        }

        let key = PlayerKey::new(game_name, tag_line, region);

        if !force_refresh {
            if let Some(cached) = self.with_db(|db| db.get_snapshot(&key))? {
                info!(player = %key, updated_at = cached.updated_at, "serving cached snapshot");
                let mut snapshot = cached.value;
                snapshot.from_cache = true;
                snapshot.updated_at = cached.updated_at;

                if self.collect_season_history {
                    let history = self
                        .season_history(game_name, tag_line, region, false)
                        .await?;
                    if !history.is_empty() {
                        snapshot.season_history = history;
                    }
                }
                return Ok(snapshot);
            }
            debug!(player = %key, "snapshot cache miss");
        }

        let mut snapshot = match self.fetcher.fetch(game_name, tag_line, region).await {
            Ok(snapshot) => snapshot,
            Err(e) if e.is_user_facing() => {
                return self.failure(game_name, tag_line, region, &e);
            }
            Err(e) => return Err(e),
        };
        snapshot.from_cache = false;

        if self.collect_season_history {
            snapshot.season_history = self
                .season_history(&snapshot.game_name, &snapshot.tag_line, region, true)
                .await?;
        }

        let resolved = PlayerKey::new(&snapshot.game_name, &snapshot.tag_line, region);
        self.with_db(|db| db.save_snapshot(&resolved, &snapshot))?;
        info!(player = %resolved, "snapshot refreshed");

        Ok(snapshot)
    }

    /// Season history through its own cache.
    ///
    /// A soft read returns the cached history when present. Otherwise the page
    /// is scraped and a non-empty result is cached; an empty scrape never
    /// replaces earlier data.
    pub async fn season_history(
        &self,
        game_name: &str,
        tag_line: &str,
        region: &Region,
        force_refresh: bool,
    ) -> Result<SeasonHistory> {
        let key = PlayerKey::new(game_name, tag_line, region);

        if !force_refresh {
            if let Some(cached) = self.with_db(|db| db.get_season_history(&key))? {
                debug!(player = %key, "season history cache hit");
                return Ok(cached.value);
            }
        }

        let history = self
            .scraper
            .scrape(game_name, tag_line, region)
            .await
            .into_history();

        if !history.is_empty() {
            let now = unix_now()?;
            self.with_db(|db| db.save_season_history(&key, &history, now))?;
        }

        Ok(history)
    }

    fn failure(
        &self,
        game_name: &str,
        tag_line: &str,
        region: &Region,
        err: &RankError,
    ) -> Result<PlayerSnapshot> {
        Ok(PlayerSnapshot::failure(
            game_name,
            tag_line,
            region.clone(),
            self.fetcher.catalog().version(),
            unix_now()?,
            err.to_string(),
        ))
    }

    pub fn clear_cache(&self) -> Result<()> {
        self.with_db(|db| db.clear_all_data())
    }

    /// Run `f` against the database. The lock is never held across an await.
    pub fn with_db<T>(
        &self,
        f: impl FnOnce(&mut PlayerDatabase) -> anyhow::Result<T>,
    ) -> Result<T> {
        let mut db = self.db.lock().map_err(|_| RankError::Cache {
            message: "database lock poisoned".to_string(),
        })?;
        Ok(f(&mut *db)?)
    }
}

/// Parameters for the lookup command
#[derive(Debug, Clone)]
pub struct LookupParams {
    pub game_name: String,
    pub tag_line: String,
    pub region: Region,
    pub refresh: bool,
    pub as_json: bool,
}

/// Handle the lookup command
pub async fn handle_lookup(config: &Config, params: LookupParams) -> Result<()> {
    // tarpaulin::skip - network and file I/O, tested via integration tests
    let service = open_lookup_service(config).await?;
    let snapshot = service
        .lookup(
            &params.game_name,
            &params.tag_line,
            &params.region,
            params.refresh,
        )
        .await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?); // tarpaulin::skip
    } else {
        print!("{}", render_snapshot(&snapshot)); // tarpaulin::skip
    }
    Ok(())
}

/// Plain-text rendering of a snapshot.
pub fn render_snapshot(snapshot: &PlayerSnapshot) -> String {
    let mut out = String::new();

    if !snapshot.success {
        let message = snapshot.error.as_deref().unwrap_or("Lookup failed");
        out.push_str(&format!("✗ {message}\n"));
        return out;
    }

    let source = if snapshot.from_cache { "cached" } else { "fresh" };
    out.push_str(&format!(
        "{}#{} ({}) - level {} [{}, updated {}]\n",
        snapshot.game_name,
        snapshot.tag_line,
        snapshot.region,
        snapshot
            .level
            .map_or_else(|| "?".to_string(), |l| l.to_string()),
        source,
        snapshot.updated_at
    ));

    out.push_str(&format!("\nRanked ({})\n", snapshot.current_season));
    if snapshot.ranked.is_empty() {
        out.push_str("  Unranked\n");
    }
    for entry in &snapshot.ranked {
        out.push_str(&format!(
            "  {:<9} {} {} {} LP  {}W {}L ({:.1}%)\n",
            entry.queue, entry.tier, entry.rank, entry.lp, entry.wins, entry.losses, entry.winrate
        ));
    }

    if !snapshot.top_champions.is_empty() {
        out.push_str("\nTop champions\n");
        for champ in &snapshot.top_champions {
            out.push_str(&format!(
                "  {:<14} {} games  {}W {}L ({:.1}%)\n",
                champ.name, champ.games, champ.wins, champ.losses, champ.winrate
            ));
        }
    }

    if let Some(sides) = &snapshot.side_stats {
        out.push_str("\nSides\n");
        for (name, side) in [("Blue", &sides.blue), ("Red", &sides.red)] {
            let marker = if side.better { " *" } else { "" };
            out.push_str(&format!(
                "  {:<5} {}W {}L ({:.1}%){}\n",
                name, side.wins, side.losses, side.winrate, marker
            ));
        }
    }

    if !snapshot.season_history.is_empty() {
        out.push_str("\nSeason history\n");
        for (label, records) in &snapshot.season_history {
            for record in records {
                out.push_str(&format!(
                    "  {:<9} {} {}\n",
                    label.as_str(),
                    record.tier,
                    record.rank
                ));
            }
        }
    }

    if !snapshot.match_history.is_empty() {
        out.push_str(&format!(
            "\nRecent matches ({})\n",
            snapshot.match_history.len()
        ));
        for game in &snapshot.match_history {
            let p = &game.performance;
            out.push_str(&format!(
                "  {} {:<14} {}/{}/{}  {} cs\n",
                if p.win { "W" } else { "L" },
                p.champion,
                p.kills,
                p.deaths,
                p.assists,
                p.cs
            ));
        }
    }

    out
}
