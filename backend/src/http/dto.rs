//! Data Transfer Objects for the HTTP API.
//!
//! Table records are served as-is from [`crate::api`]; this module only adds
//! the request/response shapes that have no table behind them.

use serde::{Deserialize, Serialize};

pub use crate::api::{Average, DefensiveEfficiency, Game, Position, TopUsagePlayer};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `connected`, `disconnected`, or `error: <reason>`
    pub database: String,
}

/// Query string of `GET /api/games`.
///
/// `date` stays a raw string so a missing or malformed value is reported by
/// the handler as a JSON 400. The handler also takes the extractor's
/// rejection (e.g. a repeated `date`) and reports it the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GamesByDateQuery {
    pub date: Option<String>,
}

/// Response of `GET /api/games/latest-date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestDateResponse {
    /// `YYYY-MM-DD`, or `null` when no games are stored
    pub date: Option<String>,
}
