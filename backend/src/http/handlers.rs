//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer in [`crate::db::services`].

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::debug;

use super::dto::{
    Average, DefensiveEfficiency, Game, GamesByDateQuery, HealthResponse, LatestDateResponse,
    Position, TopUsagePlayer,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{format_game_date, parse_game_date, GameId};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Always answers 200; the `database` field carries the repository status.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Player & Team Tables
// =============================================================================

/// GET /api/averages
pub async fn list_averages(State(state): State<AppState>) -> HandlerResult<Vec<Average>> {
    let rows = db_services::list_averages(state.repository.as_ref()).await?;
    Ok(Json(rows))
}

/// GET /api/defense/efficiency
pub async fn list_defensive_efficiency(
    State(state): State<AppState>,
) -> HandlerResult<Vec<DefensiveEfficiency>> {
    let rows = db_services::list_defensive_efficiency(state.repository.as_ref()).await?;
    Ok(Json(rows))
}

/// GET /api/positions
pub async fn list_positions(State(state): State<AppState>) -> HandlerResult<Vec<Position>> {
    let rows = db_services::list_positions(state.repository.as_ref()).await?;
    Ok(Json(rows))
}

/// GET /api/usage/top
pub async fn list_top_usage(State(state): State<AppState>) -> HandlerResult<Vec<TopUsagePlayer>> {
    let rows = db_services::list_top_usage(state.repository.as_ref()).await?;
    Ok(Json(rows))
}

// =============================================================================
// Games
// =============================================================================

/// GET /api/games?date=YYYY-MM-DD
///
/// Games on the given date ordered by start time. The date is required.
pub async fn games_by_date(
    State(state): State<AppState>,
    query: Result<Query<GamesByDateQuery>, QueryRejection>,
) -> HandlerResult<Vec<Game>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let raw = query
        .date
        .ok_or_else(|| AppError::BadRequest("Missing required query parameter 'date'".to_string()))?;

    let date = parse_game_date(&raw).map_err(|e| {
        AppError::BadRequest(format!(
            "Invalid date '{}': expected YYYY-MM-DD ({})",
            raw, e
        ))
    })?;

    let games = db_services::games_on_date(state.repository.as_ref(), date).await?;
    debug!(count = games.len(), %date, "games by date");
    Ok(Json(games))
}

/// GET /api/games/{game_id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> HandlerResult<Game> {
    let game = db_services::get_game(state.repository.as_ref(), &GameId::new(game_id)).await?;
    Ok(Json(game))
}

/// GET /api/games/dates
pub async fn list_game_dates(State(state): State<AppState>) -> HandlerResult<Vec<String>> {
    let dates = db_services::list_game_dates(state.repository.as_ref()).await?;
    Ok(Json(dates))
}

/// GET /api/games/latest-date
pub async fn latest_game_date(State(state): State<AppState>) -> HandlerResult<LatestDateResponse> {
    let date = db_services::latest_game_date(state.repository.as_ref()).await?;
    Ok(Json(LatestDateResponse {
        date: date.map(format_game_date),
    }))
}
