//! High-level database service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers. They work with
//! any implementation of [`FullRepository`] and are where a missing record
//! turns into a [`RepositoryError::NotFound`].
//!
//! # Usage
//!
//! ```ignore
//! use arrbo_backend::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let averages = services::list_averages(&repo).await?;
//!     println!("Found {} player averages", averages.len());
//!
//!     Ok(())
//! }
//! ```

use chrono::NaiveDate;
use log::{debug, info};

use super::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};
use crate::api::{
    format_game_date, Average, DefensiveEfficiency, Game, GameId, Position, TopUsagePlayer,
};

// ==================== Health & Connection ====================

/// Check if the backing store is reachable.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Player & Team Tables ====================

/// List every player average.
pub async fn list_averages<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Average>> {
    let rows = repo.find_all_averages().await?;
    debug!("Service layer: {} averages", rows.len());
    Ok(rows)
}

/// List every player position.
pub async fn list_positions<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Position>> {
    let rows = repo.find_all_positions().await?;
    debug!("Service layer: {} positions", rows.len());
    Ok(rows)
}

/// List the top usage players of every team.
pub async fn list_top_usage<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<TopUsagePlayer>> {
    let rows = repo.find_all_top_usage().await?;
    debug!("Service layer: {} top usage rows", rows.len());
    Ok(rows)
}

/// List defensive efficiency for every team.
pub async fn list_defensive_efficiency<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<DefensiveEfficiency>> {
    let rows = repo.find_all_defensive_efficiency().await?;
    debug!("Service layer: {} defensive efficiency rows", rows.len());
    Ok(rows)
}

// ==================== Games ====================

/// List every game, by date then start time.
pub async fn list_games<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Game>> {
    repo.find_all_games().await
}

/// Games played on `date`, earliest start first.
///
/// An empty result is not an error.
pub async fn games_on_date<R: FullRepository + ?Sized>(
    repo: &R,
    date: NaiveDate,
) -> RepositoryResult<Vec<Game>> {
    let games = repo.find_games_by_date(date).await?;
    info!(
        "Service layer: {} game(s) on {}",
        games.len(),
        format_game_date(date)
    );
    Ok(games)
}

/// Get a single game.
///
/// # Returns
/// * `Ok(Game)` - The game
/// * `Err(RepositoryError::NotFound)` - No game has this id
pub async fn get_game<R: FullRepository + ?Sized>(
    repo: &R,
    game_id: &GameId,
) -> RepositoryResult<Game> {
    debug!("Service layer: loading game {}", game_id);
    repo.find_game_by_id(game_id).await?.ok_or_else(|| {
        RepositoryError::not_found_with_context(
            format!("Game {} not found", game_id),
            ErrorContext::new("get_game")
                .with_entity("game")
                .with_entity_id(game_id),
        )
    })
}

/// The most recent game date, or `None` when no games are stored.
pub async fn latest_game_date<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Option<NaiveDate>> {
    repo.find_max_game_date().await
}

/// Every date with at least one game, `YYYY-MM-DD`, ascending.
pub async fn list_game_dates<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<String>> {
    repo.find_distinct_game_dates().await
}
