use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel::sql_types::Text;

use super::schema::{averages, defensive_efficiency, games, positions, top_usage_players};
use crate::api::{
    Average, AverageId, DefensiveEfficiency, Game, GameId, Position, PositionId, TeamId,
    TopUsagePlayer,
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GameRow {
    pub game_id: String,
    pub game_date: NaiveDate,
    pub start_time_utc: Option<DateTime<Utc>>,
    pub status_text: Option<String>,
    pub home_team_id: Option<i32>,
    pub home_team_abbr: Option<String>,
    pub home_team_score: Option<i32>,
    pub away_team_id: Option<i32>,
    pub away_team_abbr: Option<String>,
    pub away_team_score: Option<i32>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            game_id: GameId(row.game_id),
            game_date: row.game_date,
            start_time_utc: row.start_time_utc,
            status_text: row.status_text,
            home_team_id: row.home_team_id.map(TeamId),
            home_team_abbr: row.home_team_abbr,
            home_team_score: row.home_team_score,
            away_team_id: row.away_team_id.map(TeamId),
            away_team_abbr: row.away_team_abbr,
            away_team_score: row.away_team_score,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = averages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AverageRow {
    pub id: i32,
    pub player_name: Option<String>,
    pub player_pts: Option<f64>,
    pub player_reb: Option<f64>,
    pub player_ast: Option<f64>,
    pub player_pra: Option<f64>,
}

impl From<AverageRow> for Average {
    fn from(row: AverageRow) -> Self {
        Average {
            id: AverageId(row.id),
            player_name: row.player_name,
            player_pts: row.player_pts,
            player_reb: row.player_reb,
            player_ast: row.player_ast,
            player_pra: row.player_pra,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = positions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PositionRow {
    pub id: i32,
    pub player_name: Option<String>,
    pub player_position: Option<String>,
}

impl From<PositionRow> for Position {
    fn from(row: PositionRow) -> Self {
        Position {
            id: PositionId(row.id),
            player_name: row.player_name,
            player_position: row.player_position,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = top_usage_players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TopUsagePlayerRow {
    pub team_id: i32,
    pub player1_name: Option<String>,
    pub player1_usage: Option<f64>,
    pub player2_name: Option<String>,
    pub player2_usage: Option<f64>,
    pub player3_name: Option<String>,
    pub player3_usage: Option<f64>,
    pub player4_name: Option<String>,
    pub player4_usage: Option<f64>,
    pub player5_name: Option<String>,
    pub player5_usage: Option<f64>,
}

impl From<TopUsagePlayerRow> for TopUsagePlayer {
    fn from(row: TopUsagePlayerRow) -> Self {
        TopUsagePlayer {
            team_id: TeamId(row.team_id),
            player1_name: row.player1_name,
            player1_usage: row.player1_usage,
            player2_name: row.player2_name,
            player2_usage: row.player2_usage,
            player3_name: row.player3_name,
            player3_usage: row.player3_usage,
            player4_name: row.player4_name,
            player4_usage: row.player4_usage,
            player5_name: row.player5_name,
            player5_usage: row.player5_usage,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = defensive_efficiency)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DefensiveEfficiencyRow {
    pub team_id: i32,
    pub pg_efficiency: Option<f64>,
    pub sg_efficiency: Option<f64>,
    pub sf_efficiency: Option<f64>,
    pub pf_efficiency: Option<f64>,
    pub c_efficiency: Option<f64>,
}

impl From<DefensiveEfficiencyRow> for DefensiveEfficiency {
    fn from(row: DefensiveEfficiencyRow) -> Self {
        DefensiveEfficiency {
            team_id: TeamId(row.team_id),
            pg_efficiency: row.pg_efficiency,
            sg_efficiency: row.sg_efficiency,
            sf_efficiency: row.sf_efficiency,
            pf_efficiency: row.pf_efficiency,
            c_efficiency: row.c_efficiency,
        }
    }
}

/// Result row of the distinct game-date listing (raw SQL).
#[derive(Debug, Clone, QueryableByName)]
pub struct GameDateRow {
    #[diesel(sql_type = Text)]
    pub game_date: String,
}
