//! Text extraction of past season ranks.
//!
//! The profile page is treated as unstructured text. Each rank appears as
//! `Season <n> [(<split info>)] ... this player was <Tier> [<division>]` with
//! no markup between the season and the sentence.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{SeasonHistory, SeasonLabel, SeasonRecord};
use crate::riot::compute::capitalize;

static SEASON_RANK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Season\s*(\d+)(?:\s*\(([^)]+)\))?[^<]*?this player was\s*(Iron|Bronze|Silver|Gold|Platinum|Emerald|Diamond|Master|Grandmaster|Challenger)\s*(?-i:(IV|I{1,3})\b)?",
    )
    .expect("valid season rank regex")
});

static SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Split\s*(\d)").expect("valid split regex"));

/// Seasons the site leaks that are placeholders or not yet played.
pub fn is_excluded_season(season: u32) -> bool {
    season >= 2026 || season == 16
}

/// Extract season ranks from page text, newest season first.
///
/// A season label that appears more than once keeps its first occurrence in
/// page order.
pub fn parse_season_history(page: &str) -> SeasonHistory {
    let mut history = SeasonHistory::new();

    for caps in SEASON_RANK_RE.captures_iter(page) {
        let Ok(season) = caps[1].parse::<u32>() else {
            continue;
        };
        if is_excluded_season(season) {
            continue;
        }

        let split = caps
            .get(2)
            .and_then(|info| SPLIT_RE.captures(info.as_str()))
            .and_then(|split| split[1].parse::<u32>().ok());
        let label = SeasonLabel::from_parts(season, split);

        let tier = capitalize(&caps[3]);
        let rank = caps
            .get(4)
            .map(|division| division.as_str().to_uppercase())
            .unwrap_or_default();

        history
            .entry(label)
            .or_insert_with(|| vec![SeasonRecord::solo_duo(tier, rank)]);
    }

    history
}
