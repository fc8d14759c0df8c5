//! The composite player snapshot returned by a lookup and stored in the cache.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::season::SeasonHistory;
use crate::cli::types::{Puuid, Region};

/// Season label shown alongside current ranked data.
pub const CURRENT_SEASON: &str = "S2025 S1";

/// Full aggregated result for one player at one point in time.
///
/// A failed lookup is still a snapshot: `success` is false, `error` carries
/// the user-facing message and every data field is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub success: bool,
    pub error: Option<String>,
    /// `gameName#tagLine` as returned by the account endpoint.
    pub player: Option<String>,
    pub game_name: String,
    pub tag_line: String,
    pub region: Region,
    pub puuid: Option<Puuid>,
    pub level: Option<i64>,
    pub profile_icon: Option<i64>,
    #[serde(default)]
    pub ranked: Vec<RankedEntry>,
    #[serde(default)]
    pub season_history: SeasonHistory,
    #[serde(default)]
    pub top_champions: Vec<TopChampion>,
    pub side_stats: Option<SideStats>,
    #[serde(default)]
    pub match_history: Vec<MatchSummary>,
    pub ddragon_version: String,
    pub current_season: String,
    pub updated_at: u64,
    #[serde(default)]
    pub from_cache: bool,
}

impl PlayerSnapshot {
    /// Empty, not-yet-successful snapshot for a player.
    pub fn new(
        game_name: &str,
        tag_line: &str,
        region: Region,
        ddragon_version: &str,
        updated_at: u64,
    ) -> Self {
        Self {
            success: false,
            error: None,
            player: None,
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
            region,
            puuid: None,
            level: None,
            profile_icon: None,
            ranked: Vec::new(),
            season_history: SeasonHistory::new(),
            top_champions: Vec::new(),
            side_stats: None,
            match_history: Vec::new(),
            ddragon_version: ddragon_version.to_string(),
            current_season: CURRENT_SEASON.to_string(),
            updated_at,
            from_cache: false,
        }
    }

    /// Failed lookup carrying the identity that was asked for, the catalog
    /// version and the time of the attempt.
    pub fn failure(
        game_name: &str,
        tag_line: &str,
        region: Region,
        ddragon_version: &str,
        updated_at: u64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::new(game_name, tag_line, region, ddragon_version, updated_at)
        }
    }
}

/// One ranked queue as shown on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    /// `Solo/Duo` or `Flex`.
    pub queue: String,
    pub tier: String,
    pub tier_lower: String,
    pub rank: String,
    pub lp: i64,
    pub wins: u32,
    pub losses: u32,
    pub winrate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopChampion {
    pub name: String,
    pub id: String,
    pub wins: u32,
    pub losses: u32,
    pub winrate: f64,
    pub games: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideRecord {
    pub wins: u32,
    pub losses: u32,
    pub winrate: f64,
    /// Strictly higher win rate than the other side.
    pub better: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideStats {
    pub blue: SideRecord,
    pub red: SideRecord,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuneStyle {
    pub style: i64,
    pub perks: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunePage {
    pub primary: RuneStyle,
    pub secondary: RuneStyle,
    pub stat_perks: Value,
}

/// What one participant did in one match: champion, score line and build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub champion: String,
    /// Symbolic champion id (e.g. `MonkeyKing`), not the numeric key.
    pub champion_id: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub cs: u32,
    pub gold: u32,
    pub damage: u32,
    pub items: Vec<i64>,
    pub summoner1: i64,
    pub summoner2: i64,
    pub primary_rune: i64,
    pub secondary_rune: i64,
    pub runes: RunePage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub puuid: Puuid,
    pub summoner_name: String,
    pub tag_line: String,
    pub team_id: i64,
    #[serde(flatten)]
    pub performance: Performance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: String,
    #[serde(flatten)]
    pub performance: Performance,
    /// Seconds.
    pub duration: i64,
    /// Game start, epoch milliseconds.
    pub timestamp: i64,
    pub game_mode: String,
    pub queue_id: i64,
    #[serde(default)]
    pub participants: Vec<ParticipantSummary>,
}
