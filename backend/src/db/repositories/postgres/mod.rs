//! Postgres repository implementation using Diesel.
//!
//! This module implements the repository traits against the stats tables
//! (`games`, `averages`, `positions`, `top_usage_players`,
//! `defensive_efficiency`) that the ingestion jobs populate.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Blocking Diesel calls moved off the async runtime
//! - Optional embedded migration that creates the tables when missing
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)
//! - `PG_RUN_MIGRATIONS`: Create missing tables on startup (default: true)

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{debug, info};
use std::time::Duration;
use tokio::task;

use crate::api::{
    Average, AverageId, DefensiveEfficiency, Game, GameId, Position, PositionId, TeamId,
    TopUsagePlayer,
};
use crate::db::repository::{
    AverageRepository, DefensiveEfficiencyRepository, ErrorContext, GameRepository,
    PositionRepository, RepositoryError, RepositoryResult, TopUsageRepository,
};

mod models;
mod schema;

use models::*;
use schema::*;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Distinct game dates, formatted in the database.
const DISTINCT_GAME_DATES_SQL: &str =
    "SELECT DISTINCT to_char(game_date, 'YYYY-MM-DD') AS game_date FROM games ORDER BY game_date";

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
    /// Create missing tables on startup
    pub run_migrations: bool,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
            run_migrations: true,
        }
    }
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
    /// - `PG_POOL_MAX`: Maximum pool size (default: 10)
    /// - `PG_POOL_MIN`: Minimum pool size (default: 1)
    /// - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
    /// - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)
    /// - `PG_RUN_MIGRATIONS`: `true`/`false` (default: true)
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let defaults = Self::default();

        Ok(Self {
            database_url,
            max_pool_size: env_or("PG_POOL_MAX", defaults.max_pool_size),
            min_pool_size: env_or("PG_POOL_MIN", defaults.min_pool_size),
            connection_timeout_sec: env_or("PG_CONN_TIMEOUT_SEC", defaults.connection_timeout_sec),
            idle_timeout_sec: env_or("PG_IDLE_TIMEOUT_SEC", defaults.idle_timeout_sec),
            run_migrations: env_or("PG_RUN_MIGRATIONS", defaults.run_migrations),
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Diesel-backed repository for Postgres.
#[derive(Clone, Debug)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new repository, optionally running the embedded migration.
    ///
    /// # Returns
    /// * `Ok(PostgresRepository)` on success
    /// * `Err(RepositoryError)` if the pool cannot be built or migration fails
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        if config.run_migrations {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("get_connection_for_migrations"),
                )
            })?;
            Self::run_migrations(&mut conn)?;
        }

        info!(
            "Postgres pool ready (max_size={}, min_idle={})",
            config.max_pool_size, config.min_pool_size
        );
        Ok(Self { pool })
    }

    /// Run pending database migrations.
    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Migration failed: {}", e),
                ErrorContext::new("run_migrations"),
            )
        })?;
        if !applied.is_empty() {
            info!("Applied {} pending migration(s)", applied.len());
        }
        Ok(())
    }

    /// Run a Diesel operation on a pooled connection inside `spawn_blocking`.
    ///
    /// Failures are returned as-is, tagged with `operation`.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, diesel::result::Error> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new(operation).with_details("get_connection"),
                )
            })?;
            debug!("postgres: {}", operation);
            f(&mut conn).map_err(|e| RepositoryError::from(e).with_operation(operation))
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new(operation).with_details("spawn_blocking"),
            )
        })?
    }
}

#[async_trait]
impl GameRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn("health_check", |conn| {
            sql_query("SELECT 1").execute(conn).map(|_| true)
        })
        .await
    }

    async fn find_all_games(&self) -> RepositoryResult<Vec<Game>> {
        let rows = self
            .with_conn("find_all_games", |conn| {
                games::table
                    .select(GameRow::as_select())
                    .order((
                        games::game_date.asc(),
                        games::start_time_utc.asc(),
                        games::game_id.asc(),
                    ))
                    .load::<GameRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn find_game_by_id(&self, game_id: &GameId) -> RepositoryResult<Option<Game>> {
        let key = game_id.0.clone();
        let row = self
            .with_conn("find_game_by_id", move |conn| {
                games::table
                    .find(key)
                    .select(GameRow::as_select())
                    .first::<GameRow>(conn)
                    .optional()
            })
            .await?;
        Ok(row.map(Game::from))
    }

    async fn find_games_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Game>> {
        let rows = self
            .with_conn("find_games_by_date", move |conn| {
                games::table
                    .filter(games::game_date.eq(date))
                    .select(GameRow::as_select())
                    .order((games::start_time_utc.asc(), games::game_id.asc()))
                    .load::<GameRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn find_max_game_date(&self) -> RepositoryResult<Option<NaiveDate>> {
        self.with_conn("find_max_game_date", |conn| {
            games::table
                .select(diesel::dsl::max(games::game_date))
                .first::<Option<NaiveDate>>(conn)
        })
        .await
    }

    async fn find_distinct_game_dates(&self) -> RepositoryResult<Vec<String>> {
        let rows = self
            .with_conn("find_distinct_game_dates", |conn| {
                sql_query(DISTINCT_GAME_DATES_SQL).load::<GameDateRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(|r| r.game_date).collect())
    }
}

#[async_trait]
impl AverageRepository for PostgresRepository {
    async fn find_all_averages(&self) -> RepositoryResult<Vec<Average>> {
        let rows = self
            .with_conn("find_all_averages", |conn| {
                averages::table
                    .select(AverageRow::as_select())
                    .order(averages::id.asc())
                    .load::<AverageRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Average::from).collect())
    }

    async fn find_average_by_id(&self, id: AverageId) -> RepositoryResult<Option<Average>> {
        let row = self
            .with_conn("find_average_by_id", move |conn| {
                averages::table
                    .find(id.0)
                    .select(AverageRow::as_select())
                    .first::<AverageRow>(conn)
                    .optional()
            })
            .await?;
        Ok(row.map(Average::from))
    }
}

#[async_trait]
impl PositionRepository for PostgresRepository {
    async fn find_all_positions(&self) -> RepositoryResult<Vec<Position>> {
        let rows = self
            .with_conn("find_all_positions", |conn| {
                positions::table
                    .select(PositionRow::as_select())
                    .order(positions::id.asc())
                    .load::<PositionRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Position::from).collect())
    }

    async fn find_position_by_id(&self, id: PositionId) -> RepositoryResult<Option<Position>> {
        let row = self
            .with_conn("find_position_by_id", move |conn| {
                positions::table
                    .find(id.0)
                    .select(PositionRow::as_select())
                    .first::<PositionRow>(conn)
                    .optional()
            })
            .await?;
        Ok(row.map(Position::from))
    }
}

#[async_trait]
impl TopUsageRepository for PostgresRepository {
    async fn find_all_top_usage(&self) -> RepositoryResult<Vec<TopUsagePlayer>> {
        let rows = self
            .with_conn("find_all_top_usage", |conn| {
                top_usage_players::table
                    .select(TopUsagePlayerRow::as_select())
                    .order(top_usage_players::team_id.asc())
                    .load::<TopUsagePlayerRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(TopUsagePlayer::from).collect())
    }

    async fn find_top_usage_by_team(
        &self,
        team_id: TeamId,
    ) -> RepositoryResult<Option<TopUsagePlayer>> {
        let row = self
            .with_conn("find_top_usage_by_team", move |conn| {
                top_usage_players::table
                    .find(team_id.0)
                    .select(TopUsagePlayerRow::as_select())
                    .first::<TopUsagePlayerRow>(conn)
                    .optional()
            })
            .await?;
        Ok(row.map(TopUsagePlayer::from))
    }
}

#[async_trait]
impl DefensiveEfficiencyRepository for PostgresRepository {
    async fn find_all_defensive_efficiency(&self) -> RepositoryResult<Vec<DefensiveEfficiency>> {
        let rows = self
            .with_conn("find_all_defensive_efficiency", |conn| {
                defensive_efficiency::table
                    .select(DefensiveEfficiencyRow::as_select())
                    .order(defensive_efficiency::team_id.asc())
                    .load::<DefensiveEfficiencyRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(DefensiveEfficiency::from).collect())
    }

    async fn find_defensive_efficiency_by_team(
        &self,
        team_id: TeamId,
    ) -> RepositoryResult<Option<DefensiveEfficiency>> {
        let row = self
            .with_conn("find_defensive_efficiency_by_team", move |conn| {
                defensive_efficiency::table
                    .find(team_id.0)
                    .select(DefensiveEfficiencyRow::as_select())
                    .first::<DefensiveEfficiencyRow>(conn)
                    .optional()
            })
            .await?;
        Ok(row.map(DefensiveEfficiency::from))
    }
}
