//! Games repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::api::{Game, GameId};

/// Read access to the `games` table.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// All games, by date then start time.
    async fn find_all_games(&self) -> RepositoryResult<Vec<Game>>;

    /// Look up a single game.
    ///
    /// # Returns
    /// * `Ok(None)` - No game with that id
    async fn find_game_by_id(&self, game_id: &GameId) -> RepositoryResult<Option<Game>>;

    /// Games played on `date`, ordered by start time ascending.
    ///
    /// Games without a start time come last.
    async fn find_games_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Game>>;

    /// The latest game date, or `None` when the table is empty.
    async fn find_max_game_date(&self) -> RepositoryResult<Option<NaiveDate>>;

    /// Every distinct game date as `YYYY-MM-DD`, ascending.
    async fn find_distinct_game_dates(&self) -> RepositoryResult<Vec<String>>;
}
