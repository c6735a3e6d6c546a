use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Position, PositionId};

/// Read access to the `positions` table.
#[async_trait]
pub trait PositionRepository: Send + Sync {
    /// All player positions, by id.
    async fn find_all_positions(&self) -> RepositoryResult<Vec<Position>>;

    async fn find_position_by_id(&self, id: PositionId) -> RepositoryResult<Option<Position>>;
}
