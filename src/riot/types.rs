//! Upstream payloads: Riot API DTOs and Data Dragon champion data.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::cli::types::Puuid;


/// `riot/account/v1/accounts/by-riot-id`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: Puuid,
    pub game_name: String,
    pub tag_line: String,
}

/// `lol/summoner/v4/summoners/by-puuid`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub summoner_level: i64,
    pub profile_icon_id: i64,
}

/// `lol/league/v4/entries/by-puuid`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i64,
    pub wins: u32,
    pub losses: u32,
}

/// `lol/match/v5/matches/{matchId}`
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_duration: i64,
    pub game_start_timestamp: i64,
    #[serde(default = "default_game_mode")]
    pub game_mode: String,
    #[serde(default)]
    pub queue_id: i64,
    pub participants: Vec<ParticipantDto>,
}

fn default_game_mode() -> String {
    "CLASSIC".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: Puuid,
    #[serde(default)]
    pub riot_id_game_name: Option<String>,
    #[serde(default)]
    pub summoner_name: Option<String>,
    #[serde(default)]
    pub riot_id_tagline: Option<String>,
    pub champion_id: i64,
    pub team_id: i64,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    pub gold_earned: u32,
    pub total_damage_dealt_to_champions: u32,
    #[serde(default)]
    pub item0: i64,
    #[serde(default)]
    pub item1: i64,
    #[serde(default)]
    pub item2: i64,
    #[serde(default)]
    pub item3: i64,
    #[serde(default)]
    pub item4: i64,
    #[serde(default)]
    pub item5: i64,
    #[serde(default)]
    pub item6: i64,
    #[serde(default)]
    pub summoner1_id: i64,
    #[serde(default)]
    pub summoner2_id: i64,
    #[serde(default)]
    pub perks: PerksDto,
}

impl ParticipantDto {
    /// The seven item slots in order.
    pub fn items(&self) -> Vec<i64> {
        vec![
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }

    /// Riot ID name, falling back to the legacy summoner name.
    pub fn display_name(&self) -> &str {
        self.riot_id_game_name
            .as_deref()
            .or(self.summoner_name.as_deref())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerksDto {
    #[serde(default)]
    pub styles: Vec<PerkStyleDto>,
    #[serde(default = "empty_object")]
    pub stat_perks: Value,
}

impl Default for PerksDto {
    fn default() -> Self {
        Self {
            styles: Vec::new(),
            stat_perks: empty_object(),
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerkStyleDto {
    #[serde(default)]
    pub style: i64,
    #[serde(default)]
    pub selections: Vec<PerkSelectionDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerkSelectionDto {
    #[serde(default)]
    pub perk: i64,
}

/// `cdn/{version}/data/en_US/champion.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ChampionDataEnvelope {
    pub data: HashMap<String, ChampionDataEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChampionDataEntry {
    /// Numeric champion key, as a string.
    pub key: String,
    pub id: String,
    pub name: String,
}
