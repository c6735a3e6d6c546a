use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{TeamId, TopUsagePlayer};

/// Read access to the `top_usage_players` table.
#[async_trait]
pub trait TopUsageRepository: Send + Sync {
    /// One row per team, by team id.
    async fn find_all_top_usage(&self) -> RepositoryResult<Vec<TopUsagePlayer>>;

    async fn find_top_usage_by_team(&self, team_id: TeamId)
        -> RepositoryResult<Option<TopUsagePlayer>>;
}
