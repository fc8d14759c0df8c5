//! End-to-end lookup tests against mocked upstreams

use std::path::PathBuf;
use std::time::Duration;

use lol_rank::{
    commands::{common::build_lookup_service, LookupService},
    config::{Config, Endpoints},
    error::{MISSING_INPUT_MESSAGE, PLAYER_NOT_FOUND_MESSAGE},
    storage::PlayerDatabase,
    PlayerKey, PlayerSnapshot, Region, SeasonHistory, SeasonLabel, SeasonRecord,
};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const PUUID: &str = "puuid-agurin";
const AHRI: i64 = 103;

const HISTORY_PAGE: &str = r#"<html>
<div>Season 14 (Split 3) - At the end of the split, this player was Master</div>
<div>Season 13 - At the end of the season, this player was Diamond II</div>
</html>"#;

fn participant(puuid: &str, champion_id: i64, team_id: i64, win: bool) -> Value {
    json!({
        "puuid": puuid,
        "riotIdGameName": format!("name-{puuid}"),
        "riotIdTagline": "EUW",
        "championId": champion_id,
        "teamId": team_id,
        "win": win,
        "kills": 7,
        "deaths": 3,
        "assists": 11,
        "totalMinionsKilled": 210,
        "neutralMinionsKilled": 4,
        "goldEarned": 12500,
        "totalDamageDealtToChampions": 28000,
        "item0": 6655,
        "summoner1Id": 4,
        "summoner2Id": 14
    })
}

fn game(team_id: i64, win: bool) -> Value {
    let enemy_team = if team_id == 100 { 200 } else { 100 };
    json!({
        "info": {
            "gameDuration": 1650,
            "gameStartTimestamp": 1_735_000_000_000i64,
            "queueId": 420,
            "participants": [
                participant(PUUID, AHRI, team_id, win),
                participant("puuid-enemy", 64, enemy_team, !win)
            ]
        }
    })
}

async fn mount_static_data(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/versions.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["15.1.1", "14.24.1"])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cdn/15.1.1/data/en_US/champion.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "Ahri": {"key": "103", "id": "Ahri", "name": "Ahri"},
                "LeeSin": {"key": "64", "id": "LeeSin", "name": "Lee Sin"}
            }
        })))
        .mount(server)
        .await;
}

/// Account, summoner and league endpoints. The account lookup is keyed on
/// the lowercase input and resolves to the canonical casing.
async fn mount_player(server: &MockServer, expected_account_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/riot/account/v1/accounts/by-riot-id/agurin/euw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "puuid": PUUID,
            "gameName": "Agurin",
            "tagLine": "EUW"
        })))
        .expect(expected_account_calls)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/lol/summoner/v4/summoners/by-puuid/{PUUID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summonerLevel": 512,
            "profileIconId": 29
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/lol/league/v4/entries/by-puuid/{PUUID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "queueType": "RANKED_SOLO_5x5",
            "tier": "DIAMOND",
            "rank": "I",
            "leaguePoints": 75,
            "wins": 7,
            "losses": 3
        }])))
        .mount(server)
        .await;
}

/// Four match ids; the newest one is slow and the oldest one fails.
async fn mount_matches(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/lol/match/v5/matches/by-puuid/{PUUID}/ids")))
        .and(query_param("type", "ranked"))
        .and(query_param("count", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "EUW1_3", "EUW1_2", "EUW1_1", "EUW1_0"
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/EUW1_3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(game(100, true))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/EUW1_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(game(200, true)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/EUW1_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(game(100, false)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/EUW1_0"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

async fn mount_history(server: &MockServer, name: &str, page: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/summoner/euw/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(server)
        .await;
}

async fn service_with_db(server: &MockServer, db: PlayerDatabase) -> LookupService {
    let mut config = Config::new("RGAPI-test", PathBuf::from("unused.db"));
    config.endpoints = Endpoints::single_host(&server.uri());
    build_lookup_service(&config, db).await.unwrap()
}

async fn service_for(server: &MockServer) -> LookupService {
    service_with_db(server, PlayerDatabase::new_in_memory().unwrap()).await
}

fn region() -> Region {
    Region::new("euw1")
}

fn history(label: &str, tier: &str) -> SeasonHistory {
    let mut history = SeasonHistory::new();
    history.insert(
        SeasonLabel::new(label),
        vec![SeasonRecord::solo_duo(tier, "")],
    );
    history
}

fn cached_snapshot(updated_at: u64) -> PlayerSnapshot {
    let mut snapshot = PlayerSnapshot::new("Agurin", "EUW", region(), "15.1.1", updated_at);
    snapshot.success = true;
    snapshot.level = Some(400);
    snapshot.season_history = history("S12", "Gold");
    snapshot
}

#[tokio::test]
async fn test_fresh_lookup_aggregates_everything() {
    let server = MockServer::start().await;
    mount_static_data(&server).await;
    mount_player(&server, 1).await;
    mount_matches(&server).await;
    mount_history(&server, "Agurin-EUW", HISTORY_PAGE).await;

    let service = service_for(&server).await;
    let snapshot = service.lookup("agurin", "euw", &region(), false).await.unwrap();

    assert!(snapshot.success);
    assert!(!snapshot.from_cache);
    assert_eq!(snapshot.player.as_deref(), Some("Agurin#EUW"));
    assert_eq!(snapshot.game_name, "Agurin");
    assert_eq!(snapshot.level, Some(512));
    assert_eq!(snapshot.profile_icon, Some(29));
    assert_eq!(snapshot.ddragon_version, "15.1.1");
    assert_eq!(snapshot.current_season, "S2025 S1");

    let solo = &snapshot.ranked[0];
    assert_eq!(solo.queue, "Solo/Duo");
    assert_eq!(solo.tier, "Diamond");
    assert_eq!(solo.tier_lower, "diamond");
    assert_eq!(solo.winrate, 70.0);

    // Three Ahri games: two wins, one loss. EUW1_0 failed and was skipped.
    assert_eq!(snapshot.top_champions.len(), 1);
    let ahri = &snapshot.top_champions[0];
    assert_eq!((ahri.name.as_str(), ahri.games, ahri.wins), ("Ahri", 3, 2));
    assert_eq!(ahri.winrate, 66.7);

    let sides = snapshot.side_stats.as_ref().unwrap();
    assert_eq!((sides.blue.wins, sides.blue.losses), (1, 1));
    assert_eq!((sides.red.wins, sides.red.losses), (1, 0));
    assert!(sides.red.better && !sides.blue.better);

    let ids: Vec<&str> = snapshot
        .match_history
        .iter()
        .map(|m| m.match_id.as_str())
        .collect();
    assert_eq!(ids, vec!["EUW1_3", "EUW1_2", "EUW1_1"]);
    assert_eq!(snapshot.match_history[0].participants.len(), 2);
    assert_eq!(snapshot.match_history[0].game_mode, "CLASSIC");

    let labels: Vec<&str> = snapshot.season_history.keys().map(|l| l.as_str()).collect();
    assert_eq!(labels, vec!["S14 S3", "S13"]);

    let key = PlayerKey::new("Agurin", "EUW", &region());
    let stored = service.with_db(|db| db.get_snapshot(&key)).unwrap().unwrap();
    assert_eq!(stored.value, snapshot);
    assert_eq!(stored.updated_at, snapshot.updated_at);

    let counts = service.with_db(|db| db.counts()).unwrap();
    assert_eq!((counts.players, counts.season_histories), (1, 1));
    let history = service
        .with_db(|db| db.get_season_history(&key))
        .unwrap()
        .unwrap();
    assert_eq!(history.value, snapshot.season_history);
}

#[tokio::test]
async fn test_unknown_player_is_not_cached() {
    let server = MockServer::start().await;
    mount_static_data(&server).await;
    Mock::given(method("GET"))
        .and(path("/riot/account/v1/accounts/by-riot-id/Nobody/0000"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/lol/summoner/v4/summoners/by-puuid/{PUUID}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server).await;
    let snapshot = service.lookup("Nobody", "0000", &region(), false).await.unwrap();

    assert!(!snapshot.success);
    assert_eq!(snapshot.error.as_deref(), Some(PLAYER_NOT_FOUND_MESSAGE));
    assert!(snapshot.ranked.is_empty());
    assert_eq!(snapshot.ddragon_version, "15.1.1");
    assert!(snapshot.updated_at > 0);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Player not found. Check the Riot ID and tag.");

    let counts = service.with_db(|db| db.counts()).unwrap();
    assert_eq!((counts.players, counts.season_histories), (0, 0));
}

#[tokio::test]
async fn test_blank_tag_is_rejected() {
    let server = MockServer::start().await;
    let service = service_for(&server).await;
    let snapshot = service.lookup("Agurin", " ", &region(), true).await.unwrap();
    assert!(!snapshot.success);
    assert_eq!(snapshot.error.as_deref(), Some(MISSING_INPUT_MESSAGE));
}

#[tokio::test]
async fn test_second_lookup_is_served_from_cache() {
    let server = MockServer::start().await;
    mount_static_data(&server).await;
    mount_player(&server, 1).await;
    mount_matches(&server).await;
    mount_history(&server, "Agurin-EUW", HISTORY_PAGE).await;

    let service = service_for(&server).await;
    let first = service.lookup("agurin", "euw", &region(), false).await.unwrap();
    let second = service.lookup("AGURIN", "EUW", &region(), false).await.unwrap();

    assert!(second.success);
    assert!(second.from_cache);
    assert_eq!(second.updated_at, first.updated_at);
    assert_eq!(second.ranked, first.ranked);
    assert_eq!(second.top_champions, first.top_champions);
    assert_eq!(second.side_stats, first.side_stats);
    assert_eq!(second.season_history, first.season_history);
}

#[tokio::test]
async fn test_cache_hit_overlays_non_empty_history() {
    let server = MockServer::start().await;
    mount_static_data(&server).await;
    mount_player(&server, 0).await;
    mount_history(&server, "Agurin-EUW", HISTORY_PAGE).await;

    let mut db = PlayerDatabase::new_in_memory().unwrap();
    let key = PlayerKey::new("Agurin", "EUW", &region());
    db.save_snapshot(&key, &cached_snapshot(100)).unwrap();

    let service = service_with_db(&server, db).await;
    let snapshot = service.lookup("Agurin", "EUW", &region(), false).await.unwrap();

    assert!(snapshot.from_cache);
    assert_eq!(snapshot.updated_at, 100);
    assert_eq!(snapshot.level, Some(400));
    assert!(snapshot
        .season_history
        .contains_key(&SeasonLabel::new("S14 S3")));
    assert!(!snapshot.season_history.contains_key(&SeasonLabel::new("S12")));
}

#[tokio::test]
async fn test_cache_hit_keeps_history_when_scrape_is_empty() {
    let server = MockServer::start().await;
    mount_static_data(&server).await;
    mount_player(&server, 0).await;
    mount_history(&server, "Agurin-EUW", "<html>No ranked data</html>").await;

    let mut db = PlayerDatabase::new_in_memory().unwrap();
    let key = PlayerKey::new("Agurin", "EUW", &region());
    db.save_snapshot(&key, &cached_snapshot(100)).unwrap();

    let service = service_with_db(&server, db).await;
    let snapshot = service.lookup("Agurin", "EUW", &region(), false).await.unwrap();

    assert!(snapshot.from_cache);
    assert_eq!(snapshot.season_history, history("S12", "Gold"));
    let counts = service.with_db(|db| db.counts()).unwrap();
    assert_eq!(counts.season_histories, 0);
}

#[tokio::test]
async fn test_forced_refresh_overwrites_cache() {
    let server = MockServer::start().await;
    mount_static_data(&server).await;
    mount_player(&server, 1).await;
    mount_matches(&server).await;
    mount_history(&server, "Agurin-EUW", "<html>No ranked data</html>").await;

    let mut db = PlayerDatabase::new_in_memory().unwrap();
    let key = PlayerKey::new("Agurin", "EUW", &region());
    db.save_snapshot(&key, &cached_snapshot(100)).unwrap();

    let service = service_with_db(&server, db).await;
    let snapshot = service.lookup("agurin", "euw", &region(), true).await.unwrap();

    assert!(!snapshot.from_cache);
    assert!(snapshot.updated_at > 100);
    assert_eq!(snapshot.level, Some(512));
    // A forced refresh attaches the fresh scrape even when it is empty.
    assert!(snapshot.season_history.is_empty());

    let stored = service.with_db(|db| db.get_snapshot(&key)).unwrap().unwrap();
    assert_eq!(stored.updated_at, snapshot.updated_at);
    assert!(!stored.value.from_cache);
}

#[tokio::test]
async fn test_match_list_failure_still_succeeds() {
    let server = MockServer::start().await;
    mount_static_data(&server).await;
    mount_player(&server, 1).await;
    mount_history(&server, "Agurin-EUW", HISTORY_PAGE).await;
    Mock::given(method("GET"))
        .and(path(format!("/lol/match/v5/matches/by-puuid/{PUUID}/ids")))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let service = service_for(&server).await;
    let snapshot = service.lookup("agurin", "euw", &region(), false).await.unwrap();

    assert!(snapshot.success);
    assert_eq!(snapshot.ranked.len(), 1);
    assert!(snapshot.top_champions.is_empty());
    assert!(snapshot.match_history.is_empty());
    assert!(snapshot.side_stats.is_none());
}

#[tokio::test]
async fn test_degraded_catalog_uses_placeholders() {
    let server = MockServer::start().await;
    mount_player(&server, 1).await;
    mount_matches(&server).await;
    mount_history(&server, "Agurin-EUW", HISTORY_PAGE).await;

    let service = service_for(&server).await;
    let snapshot = service.lookup("agurin", "euw", &region(), false).await.unwrap();

    assert!(snapshot.success);
    assert_eq!(snapshot.ddragon_version, "14.24.1");
    assert_eq!(snapshot.top_champions[0].name, "Champion 103");
    assert_eq!(snapshot.top_champions[0].id, "Unknown");
}
