//! Game records from the `games` table.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{GameId, TeamId};

/// Wire and query format for game dates (`YYYY-MM-DD`).
pub const GAME_DATE_FORMAT: &str = "%Y-%m-%d";

/// One game on the league schedule.
///
/// Team ids and abbreviations are denormalized copies written by the loader;
/// nothing here joins against a teams table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_id: GameId,
    pub game_date: NaiveDate,
    pub start_time_utc: Option<DateTime<Utc>>,
    pub status_text: Option<String>,
    pub home_team_id: Option<TeamId>,
    pub home_team_abbr: Option<String>,
    pub home_team_score: Option<i32>,
    pub away_team_id: Option<TeamId>,
    pub away_team_abbr: Option<String>,
    pub away_team_score: Option<i32>,
}

impl Game {
    /// Order by start time ascending with unknown start times last,
    /// matching PostgreSQL's `ORDER BY start_time_utc ASC`.
    pub fn cmp_start_time(&self, other: &Self) -> Ordering {
        match (&self.start_time_utc, &other.start_time_utc) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Format a game date the way it appears in date listings.
pub fn format_game_date(date: NaiveDate) -> String {
    date.format(GAME_DATE_FORMAT).to_string()
}

/// Parse an ISO `YYYY-MM-DD` date.
///
/// Chrono alone accepts one-digit months and days, so the `dddd-dd-dd`
/// shape is checked first.
pub fn parse_game_date(value: &str) -> Result<NaiveDate, GameDateError> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(GameDateError::Shape);
    }
    Ok(NaiveDate::parse_from_str(value, GAME_DATE_FORMAT)?)
}

/// Why a game date failed to parse.
#[derive(Debug, thiserror::Error)]
pub enum GameDateError {
    #[error("expected YYYY-MM-DD")]
    Shape,
    #[error(transparent)]
    Invalid(#[from] chrono::ParseError),
}
