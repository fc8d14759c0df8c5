//! Historical season ranks.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static SEASON_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^S(\d+)(?:\s*S(\d))?").expect("valid season key regex"));

/// Season label such as `S7`, `S2025` or `S14 S3` (season 14, split 3).
///
/// Labels order newest first: descending by `(season, split)`, then by the
/// raw label so that ordering stays consistent with equality. This lets a
/// [`SeasonHistory`] iterate newest-first without a separate sort step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonLabel(String);

impl SeasonLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Build `S<season>` or `S<season> S<split>`.
    pub fn from_parts(season: u32, split: Option<u32>) -> Self {
        match split {
            Some(split) => Self(format!("S{season} S{split}")),
            None => Self(format!("S{season}")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `(season, split)`; labels that don't parse sort as `(0, 0)`.
    pub fn sort_key(&self) -> (u32, u32) {
        let Some(caps) = SEASON_KEY_RE.captures(&self.0) else {
            return (0, 0);
        };
        let Ok(season) = caps[1].parse::<u32>() else {
            return (0, 0);
        };
        let split = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0);
        (season, split)
    }
}

impl Ord for SeasonLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .sort_key()
            .cmp(&self.sort_key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SeasonLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// End-of-season rank for one queue.
///
/// The history source only exposes tier and division, so `lp`, `wins`,
/// `losses` and `winrate` are always zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub queue: String,
    pub tier: String,
    pub rank: String,
    pub lp: u32,
    pub wins: u32,
    pub losses: u32,
    pub winrate: f64,
}

impl SeasonRecord {
    pub fn solo_duo(tier: impl Into<String>, rank: impl Into<String>) -> Self {
        Self {
            queue: "Solo/Duo".to_string(),
            tier: tier.into(),
            rank: rank.into(),
            lp: 0,
            wins: 0,
            losses: 0,
            winrate: 0.0,
        }
    }
}

/// Season label -> queue records, iterating newest season first.
pub type SeasonHistory = BTreeMap<SeasonLabel, Vec<SeasonRecord>>;
