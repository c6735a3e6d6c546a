//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. Rows live in ordered maps
//! keyed by primary key, so find-all results come back in key order without
//! an explicit sort.
//!
//! A repository can be seeded from a JSON file whose arrays use the same wire
//! format the API serves (see [`LocalSeed`]).

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::api::*;
use crate::db::repository::*;

/// Rows used to seed a [`LocalRepository`].
///
/// Every array is optional; field names follow the JSON wire format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSeed {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub averages: Vec<Average>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub top_usage_players: Vec<TopUsagePlayer>,
    #[serde(default)]
    pub defensive_efficiency: Vec<DefensiveEfficiency>,
}

/// In-memory local repository.
///
/// # Example
/// ```
/// use arrbo_backend::db::repositories::LocalRepository;
/// use arrbo_backend::db::repository::AverageRepository;
///
/// let repo = LocalRepository::new();
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let averages = rt.block_on(repo.find_all_averages()).unwrap();
/// assert!(averages.is_empty());
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    games: BTreeMap<GameId, Game>,
    averages: BTreeMap<AverageId, Average>,
    positions: BTreeMap<PositionId, Position>,
    top_usage: BTreeMap<TeamId, TopUsagePlayer>,
    defensive_efficiency: BTreeMap<TeamId, DefensiveEfficiency>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            games: BTreeMap::new(),
            averages: BTreeMap::new(),
            positions: BTreeMap::new(),
            top_usage: BTreeMap::new(),
            defensive_efficiency: BTreeMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository holding the given rows.
    ///
    /// Later rows replace earlier rows with the same key.
    pub fn from_seed(seed: LocalSeed) -> Self {
        let repo = Self::new();
        repo.load_seed(seed);
        repo
    }

    /// Create a repository from a JSON seed file.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ConfigurationError)` if the file cannot be read
    /// * `Err(RepositoryError::ValidationError)` if it is not a valid seed
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let context = ErrorContext::new("load_seed_file").with_details(path.display().to_string());

        let content = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read seed file: {}", e),
                context.clone(),
            )
        })?;
        let seed: LocalSeed = serde_json::from_str(&content).map_err(|e| {
            RepositoryError::validation_with_context(
                format!("Failed to parse seed file: {}", e),
                context,
            )
        })?;

        info!(
            "Seeding local repository from {} ({} games, {} averages, {} positions, {} usage rows, {} defense rows)",
            path.display(),
            seed.games.len(),
            seed.averages.len(),
            seed.positions.len(),
            seed.top_usage_players.len(),
            seed.defensive_efficiency.len()
        );
        Ok(Self::from_seed(seed))
    }

    /// Add every row of `seed`, replacing rows with the same key.
    pub fn load_seed(&self, seed: LocalSeed) {
        let mut data = self.write();
        for game in seed.games {
            data.games.insert(game.game_id.clone(), game);
        }
        for avg in seed.averages {
            data.averages.insert(avg.id, avg);
        }
        for pos in seed.positions {
            data.positions.insert(pos.id, pos);
        }
        for usage in seed.top_usage_players {
            data.top_usage.insert(usage.team_id, usage);
        }
        for eff in seed.defensive_efficiency {
            data.defensive_efficiency.insert(eff.team_id, eff);
        }
    }

    /// Insert or replace a game.
    pub fn insert_game(&self, game: Game) {
        self.write().games.insert(game.game_id.clone(), game);
    }

    /// Insert or replace a player average.
    pub fn insert_average(&self, average: Average) {
        self.write().averages.insert(average.id, average);
    }

    /// Insert or replace a player position.
    pub fn insert_position(&self, position: Position) {
        self.write().positions.insert(position.id, position);
    }

    /// Insert or replace a team's top usage row.
    pub fn insert_top_usage(&self, row: TopUsagePlayer) {
        self.write().top_usage.insert(row.team_id, row);
    }

    /// Insert or replace a team's defensive efficiency row.
    pub fn insert_defensive_efficiency(&self, row: DefensiveEfficiency) {
        self.write().defensive_efficiency.insert(row.team_id, row);
    }

    /// Set the health status for testing connection failures.
    ///
    /// While unhealthy every lookup fails with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of games stored.
    pub fn game_count(&self) -> usize {
        self.read_unchecked().games.len()
    }

    fn write(&self) -> RwLockWriteGuard<'_, LocalData> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_unchecked(&self) -> RwLockReadGuard<'_, LocalData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read access for a lookup; fails like a dropped connection when unhealthy.
    fn read(&self, operation: &str) -> RepositoryResult<RwLockReadGuard<'_, LocalData>> {
        let data = self.read_unchecked();
        if !data.is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Local repository is marked unhealthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(data)
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.read_unchecked().is_healthy)
    }

    async fn find_all_games(&self) -> RepositoryResult<Vec<Game>> {
        let data = self.read("find_all_games")?;
        let mut games: Vec<Game> = data.games.values().cloned().collect();
        games.sort_by(|a, b| {
            a.game_date
                .cmp(&b.game_date)
                .then_with(|| a.cmp_start_time(b))
        });
        Ok(games)
    }

    async fn find_game_by_id(&self, game_id: &GameId) -> RepositoryResult<Option<Game>> {
        let data = self.read("find_game_by_id")?;
        Ok(data.games.get(game_id).cloned())
    }

    async fn find_games_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Game>> {
        let data = self.read("find_games_by_date")?;
        let mut games: Vec<Game> = data
            .games
            .values()
            .filter(|g| g.game_date == date)
            .cloned()
            .collect();
        // Stable sort keeps key order among games with equal start times.
        games.sort_by(Game::cmp_start_time);
        debug!("Local lookup found {} games on {}", games.len(), date);
        Ok(games)
    }

    async fn find_max_game_date(&self) -> RepositoryResult<Option<NaiveDate>> {
        let data = self.read("find_max_game_date")?;
        Ok(data.games.values().map(|g| g.game_date).max())
    }

    async fn find_distinct_game_dates(&self) -> RepositoryResult<Vec<String>> {
        let data = self.read("find_distinct_game_dates")?;
        let dates: BTreeSet<NaiveDate> = data.games.values().map(|g| g.game_date).collect();
        Ok(dates.into_iter().map(format_game_date).collect())
    }
}

#[async_trait]
impl AverageRepository for LocalRepository {
    async fn find_all_averages(&self) -> RepositoryResult<Vec<Average>> {
        let data = self.read("find_all_averages")?;
        Ok(data.averages.values().cloned().collect())
    }

    async fn find_average_by_id(&self, id: AverageId) -> RepositoryResult<Option<Average>> {
        let data = self.read("find_average_by_id")?;
        Ok(data.averages.get(&id).cloned())
    }
}

#[async_trait]
impl PositionRepository for LocalRepository {
    async fn find_all_positions(&self) -> RepositoryResult<Vec<Position>> {
        let data = self.read("find_all_positions")?;
        Ok(data.positions.values().cloned().collect())
    }

    async fn find_position_by_id(&self, id: PositionId) -> RepositoryResult<Option<Position>> {
        let data = self.read("find_position_by_id")?;
        Ok(data.positions.get(&id).cloned())
    }
}

#[async_trait]
impl TopUsageRepository for LocalRepository {
    async fn find_all_top_usage(&self) -> RepositoryResult<Vec<TopUsagePlayer>> {
        let data = self.read("find_all_top_usage")?;
        Ok(data.top_usage.values().cloned().collect())
    }

    async fn find_top_usage_by_team(
        &self,
        team_id: TeamId,
    ) -> RepositoryResult<Option<TopUsagePlayer>> {
        let data = self.read("find_top_usage_by_team")?;
        Ok(data.top_usage.get(&team_id).cloned())
    }
}

#[async_trait]
impl DefensiveEfficiencyRepository for LocalRepository {
    async fn find_all_defensive_efficiency(&self) -> RepositoryResult<Vec<DefensiveEfficiency>> {
        let data = self.read("find_all_defensive_efficiency")?;
        Ok(data.defensive_efficiency.values().cloned().collect())
    }

    async fn find_defensive_efficiency_by_team(
        &self,
        team_id: TeamId,
    ) -> RepositoryResult<Option<DefensiveEfficiency>> {
        let data = self.read("find_defensive_efficiency_by_team")?;
        Ok(data.defensive_efficiency.get(&team_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn game(id: &str, day: NaiveDate, hour: Option<u32>) -> Game {
        Game {
            game_id: GameId::new(id),
            game_date: day,
            start_time_utc: hour.map(|h| {
                Utc.from_utc_datetime(&day.and_hms_opt(h, 0, 0).unwrap())
            }),
            status_text: None,
            home_team_id: None,
            home_team_abbr: None,
            home_team_score: None,
            away_team_id: None,
            away_team_abbr: None,
            away_team_score: None,
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = LocalRepository::new();
        assert!(repo.health_check().await.unwrap());
        repo.set_healthy(false);
        assert!(!repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_unhealthy_lookups_fail() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);
        let err = repo.find_all_positions().await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionError { .. }));
        assert_eq!(
            err.context().operation.as_deref(),
            Some("find_all_positions")
        );
    }

    #[tokio::test]
    async fn test_games_by_date_sorted_by_start() {
        let repo = LocalRepository::new();
        let day = date(2024, 1, 15);
        repo.insert_game(game("late", day, Some(3)));
        repo.insert_game(game("tbd", day, None));
        repo.insert_game(game("early", day, Some(0)));
        repo.insert_game(game("other-day", date(2024, 1, 16), Some(1)));

        let games = repo.find_games_by_date(day).await.unwrap();
        let ids: Vec<&str> = games.iter().map(|g| g.game_id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late", "tbd"]);
    }

    #[tokio::test]
    async fn test_max_date_and_distinct_dates() {
        let repo = LocalRepository::new();
        assert_eq!(repo.find_max_game_date().await.unwrap(), None);
        assert!(repo.find_distinct_game_dates().await.unwrap().is_empty());

        repo.insert_game(game("a", date(2024, 1, 16), Some(1)));
        repo.insert_game(game("b", date(2023, 12, 25), Some(1)));
        repo.insert_game(game("c", date(2024, 1, 16), Some(2)));

        assert_eq!(
            repo.find_max_game_date().await.unwrap(),
            Some(date(2024, 1, 16))
        );
        assert_eq!(
            repo.find_distinct_game_dates().await.unwrap(),
            vec!["2023-12-25".to_string(), "2024-01-16".to_string()]
        );
    }

    #[tokio::test]
    async fn test_clear_keeps_health_flag() {
        let repo = LocalRepository::new();
        repo.insert_game(game("a", date(2024, 1, 16), None));
        repo.set_healthy(false);
        repo.clear();
        assert_eq!(repo.game_count(), 0);
        assert!(!repo.health_check().await.unwrap());
    }

    #[test]
    fn test_seed_replaces_duplicate_keys() {
        let mut seed = LocalSeed::default();
        seed.games.push(game("dup", date(2024, 1, 1), None));
        seed.games.push(game("dup", date(2024, 1, 2), None));
        let repo = LocalRepository::from_seed(seed);
        assert_eq!(repo.game_count(), 1);
    }
}
