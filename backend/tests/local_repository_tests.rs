//! Tests for LocalRepository seeded from JSON.
//!
//! The seed uses the same wire format the API serves, so these double as
//! checks that every stored attribute survives a load/serialize cycle.

#![cfg(feature = "local-repo")]

mod support;

use std::sync::Arc;

use chrono::NaiveDate;
use arrbo_backend::api::{AverageId, GameId, PositionId, TeamId, DEFENSIVE_EFFICIENCY_WIRE_NAMES};
use arrbo_backend::db::repositories::{LocalRepository, LocalSeed};
use arrbo_backend::db::repository::{
    AverageRepository, DefensiveEfficiencyRepository, GameRepository, PositionRepository,
    RepositoryError, TopUsageRepository,
};

fn sample_repo() -> LocalRepository {
    let seed: LocalSeed = serde_json::from_str(support::SAMPLE_SEED).unwrap();
    LocalRepository::from_seed(seed)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_seed_file_round_trips_every_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::write_sample_seed(dir.path());
    let repo = LocalRepository::from_seed_file(&path).unwrap();

    let reloaded = LocalSeed {
        games: repo.find_all_games().await.unwrap(),
        averages: repo.find_all_averages().await.unwrap(),
        positions: repo.find_all_positions().await.unwrap(),
        top_usage_players: repo.find_all_top_usage().await.unwrap(),
        defensive_efficiency: repo.find_all_defensive_efficiency().await.unwrap(),
    };

    let original: serde_json::Value = serde_json::from_str(support::SAMPLE_SEED).unwrap();
    let mut reloaded = serde_json::to_value(&reloaded).unwrap();

    // find_all_games orders by date then start time; the seed lists the
    // untimed game first.
    let games = reloaded["games"].as_array_mut().unwrap();
    games.swap(0, 1);

    assert_eq!(original, reloaded);
}

#[tokio::test]
async fn test_find_all_games_ordering() {
    let repo = sample_repo();
    let ids: Vec<String> = repo
        .find_all_games()
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.game_id.to_string())
        .collect();
    assert_eq!(ids, vec!["0022400555", "0022400560", "0022400580"]);
}

#[tokio::test]
async fn test_games_by_date_only_that_date() {
    let repo = sample_repo();
    let games = repo.find_games_by_date(date(2024, 1, 15)).await.unwrap();

    assert_eq!(games.len(), 2);
    assert!(games.iter().all(|g| g.game_date == date(2024, 1, 15)));
    // Untimed game sorts last.
    assert!(games[0].start_time_utc.is_some());
    assert!(games[1].start_time_utc.is_none());

    assert!(repo
        .find_games_by_date(date(2024, 1, 16))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_game_lookup_by_id() {
    let repo = sample_repo();
    let game = repo
        .find_game_by_id(&GameId::new("0022400580"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(game.home_team_abbr.as_deref(), Some("LAL"));
    assert_eq!(game.away_team_id, Some(TeamId::new(7)));

    assert!(repo
        .find_game_by_id(&GameId::new("0099999999"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_player_lookups_by_id() {
    let repo = sample_repo();

    let average = repo
        .find_average_by_id(AverageId::new(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(average.player_name.as_deref(), Some("Luka Doncic"));
    assert_eq!(average.player_pra, Some(52.9));
    assert!(repo
        .find_average_by_id(AverageId::new(2))
        .await
        .unwrap()
        .is_none());

    let position = repo
        .find_position_by_id(PositionId::new(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(position.player_position.as_deref(), Some("PG"));
    assert!(repo
        .find_position_by_id(PositionId::new(99))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_date_listings_distinct_and_ascending() {
    let repo = sample_repo();
    assert_eq!(
        repo.find_distinct_game_dates().await.unwrap(),
        vec!["2024-01-15".to_string(), "2024-01-17".to_string()]
    );
    assert_eq!(
        repo.find_max_game_date().await.unwrap(),
        Some(date(2024, 1, 17))
    );
}

#[tokio::test]
async fn test_empty_repository_has_no_max_date() {
    let repo = LocalRepository::new();
    assert_eq!(repo.find_max_game_date().await.unwrap(), None);
}

#[tokio::test]
async fn test_team_lookups() {
    let repo = sample_repo();

    let usage = repo
        .find_top_usage_by_team(TeamId::new(7))
        .await
        .unwrap()
        .unwrap();
    let named: Vec<&str> = usage.slots().iter().filter_map(|(name, _)| *name).collect();
    assert_eq!(named, vec!["Luka Doncic", "Kyrie Irving", "Tim Hardaway Jr."]);

    let eff = repo
        .find_defensive_efficiency_by_team(TeamId::new(7))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(eff.c_efficiency, Some(1.11));

    assert!(repo
        .find_defensive_efficiency_by_team(TeamId::new(30))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_defensive_efficiency_wire_names() {
    let repo = sample_repo();
    let rows = repo.find_all_defensive_efficiency().await.unwrap();
    let json = serde_json::to_value(&rows[0]).unwrap();
    let obj = json.as_object().unwrap();

    for (_, wire) in DEFENSIVE_EFFICIENCY_WIRE_NAMES {
        assert!(obj.contains_key(wire), "missing {}", wire);
    }
    assert!(obj.contains_key("cEfficiency"));
    assert!(!obj.contains_key("c_efficiency"));
}

#[tokio::test]
async fn test_unhealthy_repository_fails_lookups() {
    let repo = sample_repo();
    repo.set_healthy(false);

    assert!(!repo.health_check().await.unwrap());
    let err = repo.find_all_averages().await.unwrap_err();
    assert!(matches!(err, RepositoryError::ConnectionError { .. }));
}

#[tokio::test]
async fn test_concurrent_readers() {
    let repo = Arc::new(sample_repo());
    let mut handles = Vec::new();

    for _ in 0..16 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.find_games_by_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
                .await
                .unwrap()
                .len()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 2);
    }
}

#[test]
fn test_seed_file_missing() {
    let err = match LocalRepository::from_seed_file("/nonexistent/seed.json") {
        Err(e) => e,
        Ok(_) => panic!("missing seed file accepted"),
    };
    assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
}

#[test]
fn test_seed_with_bad_date_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    std::fs::write(
        &path,
        r#"{"games": [{"gameId": "1", "gameDate": "15/01/2024"}]}"#,
    )
    .unwrap();

    let err = match LocalRepository::from_seed_file(&path) {
        Err(e) => e,
        Ok(_) => panic!("malformed seed accepted"),
    };
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}
