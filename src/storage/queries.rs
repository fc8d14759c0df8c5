//! Cache reads and writes
//!
//! A row whose payload no longer deserializes is reported as a miss, so the
//! next lookup rebuilds it from upstream instead of failing forever.

use super::{models::*, schema::PlayerDatabase};
use crate::cli::types::PlayerKey;
use crate::models::{PlayerSnapshot, SeasonHistory};
use anyhow::Result;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use tracing::warn;

impl PlayerDatabase {
    /// Cached snapshot for a player key, if any
    pub fn get_snapshot(&self, key: &PlayerKey) -> Result<Option<Cached<PlayerSnapshot>>> {
        self.get_cached("SELECT data, updated_at FROM players WHERE id = ?", key)
    }

    /// Insert or replace the snapshot stored under `key`
    pub fn save_snapshot(&mut self, key: &PlayerKey, snapshot: &PlayerSnapshot) -> Result<()> {
        let data = serde_json::to_string(snapshot)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO players (id, game_name, tag_line, region, data, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                key.as_str(),
                snapshot.game_name,
                snapshot.tag_line,
                snapshot.region.as_str(),
                data,
                snapshot.updated_at
            ],
        )?;
        Ok(())
    }

    pub fn get_season_history(&self, key: &PlayerKey) -> Result<Option<Cached<SeasonHistory>>> {
        self.get_cached(
            "SELECT data, updated_at FROM season_history_cache WHERE id = ?",
            key,
        )
    }

    pub fn save_season_history(
        &mut self,
        key: &PlayerKey,
        history: &SeasonHistory,
        updated_at: u64,
    ) -> Result<()> {
        let data = serde_json::to_string(history)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO season_history_cache (id, data, updated_at)
             VALUES (?, ?, ?)",
            params![key.as_str(), data, updated_at],
        )?;
        Ok(())
    }

    /// Row counts for both cache tables
    pub fn counts(&self) -> Result<CacheCounts> {
        let players: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        let season_histories: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM season_history_cache", [], |row| {
                    row.get(0)
                })?;
        Ok(CacheCounts {
            players,
            season_histories,
        })
    }

    /// Clear all cached data from the database
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM players", [])?;
        self.conn.execute("DELETE FROM season_history_cache", [])?;
        Ok(())
    }

    fn get_cached<T: DeserializeOwned>(
        &self,
        sql: &str,
        key: &PlayerKey,
    ) -> Result<Option<Cached<T>>> {
        let row: Option<(String, u64)> = self
            .conn
            .query_row(sql, params![key.as_str()], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()?;

        let Some((data, updated_at)) = row else {
            return Ok(None);
        };

        match serde_json::from_str(&data) {
            Ok(value) => Ok(Some(Cached { value, updated_at })),
            Err(e) => {
                warn!(key = %key, error = %e, "ignoring unreadable cache row");
                Ok(None)
            }
        }
    }
}
