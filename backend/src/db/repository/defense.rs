use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{DefensiveEfficiency, TeamId};

/// Read access to the `defensive_efficiency` table.
#[async_trait]
pub trait DefensiveEfficiencyRepository: Send + Sync {
    /// One row per team, by team id.
    async fn find_all_defensive_efficiency(&self) -> RepositoryResult<Vec<DefensiveEfficiency>>;

    async fn find_defensive_efficiency_by_team(
        &self,
        team_id: TeamId,
    ) -> RepositoryResult<Option<DefensiveEfficiency>>;
}
