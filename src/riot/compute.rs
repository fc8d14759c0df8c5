use crate::cli::types::Puuid;
use crate::models::{
    MatchSummary, ParticipantSummary, Performance, RankedEntry, RunePage, RuneStyle, SideRecord,
    SideStats, TopChampion,
};
use crate::riot::champions::ChampionCatalog;
use crate::riot::types::{LeagueEntryDto, MatchDto, ParticipantDto, PerkStyleDto};


/// Champions need at least this many games to be ranked.
pub const MIN_CHAMPION_GAMES: u32 = 3;
pub const TOP_CHAMPION_LIMIT: usize = 3;

/// Win percentage rounded to one decimal; zero games is 0.0.
pub fn win_rate(wins: u32, losses: u32) -> f64 {
    let total = wins + losses;
    if total == 0 {
        return 0.0;
    }
    round_tenth(f64::from(wins) / f64::from(total) * 100.0)
}

/// Halves round to the even tenth: 6.25 -> 6.2, 31.25 -> 31.2.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// `RANKED_SOLO_5x5` is Solo/Duo; every other queue is reported as Flex.
pub fn queue_label(queue_type: &str) -> &'static str {
    if queue_type == "RANKED_SOLO_5x5" {
        "Solo/Duo"
    } else {
        "Flex"
    }
}

/// `EMERALD` -> `Emerald`
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn ranked_entry(entry: &LeagueEntryDto) -> RankedEntry {
    let tier = capitalize(&entry.tier);
    RankedEntry {
        queue: queue_label(&entry.queue_type).to_string(),
        tier_lower: tier.to_lowercase(),
        tier,
        rank: entry.rank.clone(),
        lp: entry.league_points,
        wins: entry.wins,
        losses: entry.losses,
        winrate: win_rate(entry.wins, entry.losses),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn from_team_id(team_id: i64) -> Self {
        if team_id == 100 {
            Side::Blue
        } else {
            Side::Red
        }
    }
}

/// The tracked player's result in one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub champion_key: i64,
    pub side: Side,
    pub win: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    wins: u32,
    losses: u32,
}

impl Tally {
    fn record(&mut self, win: bool) {
        if win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Strictly higher exact win ratio than `other`; no games counts as 0%.
    fn beats(&self, other: &Tally) -> bool {
        match (self.games(), other.games()) {
            (0, _) => false,
            (_, 0) => self.wins > 0,
            (games, other_games) => {
                u64::from(self.wins) * u64::from(other_games)
                    > u64::from(other.wins) * u64::from(games)
            }
        }
    }
}

/// Best champions by win rate, then games played, among those with enough
/// games. Ties keep first-played order.
pub fn top_champions(outcomes: &[MatchOutcome], catalog: &ChampionCatalog) -> Vec<TopChampion> {
    let mut tallies: Vec<(i64, Tally)> = Vec::new();
    for outcome in outcomes {
        match tallies.iter_mut().find(|(key, _)| *key == outcome.champion_key) {
            Some((_, tally)) => tally.record(outcome.win),
            None => {
                let mut tally = Tally::default();
                tally.record(outcome.win);
                tallies.push((outcome.champion_key, tally));
            }
        }
    }

    let mut ranked: Vec<TopChampion> = tallies
        .into_iter()
        .filter(|(_, tally)| tally.games() >= MIN_CHAMPION_GAMES)
        .map(|(key, tally)| {
            let info = catalog.lookup(key);
            TopChampion {
                name: info.name,
                id: info.id,
                wins: tally.wins,
                losses: tally.losses,
                winrate: win_rate(tally.wins, tally.losses),
                games: tally.games(),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.winrate
            .total_cmp(&a.winrate)
            .then_with(|| b.games.cmp(&a.games))
    });
    ranked.truncate(TOP_CHAMPION_LIMIT);
    ranked
}

/// Wins and losses per side; `better` marks the strictly higher unrounded
/// win rate, so two rates that round alike can still differ.
pub fn side_stats(outcomes: &[MatchOutcome]) -> SideStats {
    let mut blue = Tally::default();
    let mut red = Tally::default();
    for outcome in outcomes {
        match outcome.side {
            Side::Blue => blue.record(outcome.win),
            Side::Red => red.record(outcome.win),
        }
    }

    SideStats {
        blue: SideRecord {
            wins: blue.wins,
            losses: blue.losses,
            winrate: win_rate(blue.wins, blue.losses),
            better: blue.beats(&red),
        },
        red: SideRecord {
            wins: red.wins,
            losses: red.losses,
            winrate: win_rate(red.wins, red.losses),
            better: red.beats(&blue),
        },
    }
}

fn rune_style(style: Option<&PerkStyleDto>) -> RuneStyle {
    style
        .map(|s| RuneStyle {
            style: s.style,
            perks: s.selections.iter().map(|sel| sel.perk).collect(),
        })
        .unwrap_or_default()
}

pub fn performance(participant: &ParticipantDto, catalog: &ChampionCatalog) -> Performance {
    let champion = catalog.lookup(participant.champion_id);
    let styles = &participant.perks.styles;
    let primary = rune_style(styles.first());
    let secondary = rune_style(styles.get(1));

    Performance {
        champion: champion.name,
        champion_id: champion.id,
        win: participant.win,
        kills: participant.kills,
        deaths: participant.deaths,
        assists: participant.assists,
        cs: participant.total_minions_killed + participant.neutral_minions_killed,
        gold: participant.gold_earned,
        damage: participant.total_damage_dealt_to_champions,
        items: participant.items(),
        summoner1: participant.summoner1_id,
        summoner2: participant.summoner2_id,
        primary_rune: primary.style,
        secondary_rune: secondary.style,
        runes: RunePage {
            primary,
            secondary,
            stat_perks: participant.perks.stat_perks.clone(),
        },
    }
}

pub fn participant_summary(
    participant: &ParticipantDto,
    catalog: &ChampionCatalog,
) -> ParticipantSummary {
    ParticipantSummary {
        puuid: participant.puuid.clone(),
        summoner_name: participant.display_name().to_string(),
        tag_line: participant.riot_id_tagline.clone().unwrap_or_default(),
        team_id: participant.team_id,
        performance: performance(participant, catalog),
    }
}

/// Everything derived from the match list.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchAnalysis {
    pub top_champions: Vec<TopChampion>,
    pub side_stats: SideStats,
    pub match_history: Vec<MatchSummary>,
}

/// Aggregate matches (already in match-id order) for the player `puuid`.
///
/// Matches the player does not appear in are skipped. Per-match summaries are
/// only built when `collect_details` is set.
pub fn analyze_matches(
    puuid: &Puuid,
    matches: &[(String, MatchDto)],
    catalog: &ChampionCatalog,
    collect_details: bool,
) -> MatchAnalysis {
    let mut outcomes = Vec::with_capacity(matches.len());
    let mut match_history = Vec::new();

    for (match_id, game) in matches {
        let info = &game.info;
        let Some(me) = info.participants.iter().find(|p| &p.puuid == puuid) else {
            continue;
        };

        outcomes.push(MatchOutcome {
            champion_key: me.champion_id,
            side: Side::from_team_id(me.team_id),
            win: me.win,
        });

        if collect_details {
            match_history.push(MatchSummary {
                match_id: match_id.clone(),
                performance: performance(me, catalog),
                duration: info.game_duration,
                timestamp: info.game_start_timestamp,
                game_mode: info.game_mode.clone(),
                queue_id: info.queue_id,
                participants: info
                    .participants
                    .iter()
                    .map(|p| participant_summary(p, catalog))
                    .collect(),
            });
        }
    }

    MatchAnalysis {
        top_champions: top_champions(&outcomes, catalog),
        side_stats: side_stats(&outcomes),
        match_history,
    }
}
