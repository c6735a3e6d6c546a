use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Average, AverageId};

/// Read access to the `averages` table.
#[async_trait]
pub trait AverageRepository: Send + Sync {
    /// All player averages, by id.
    async fn find_all_averages(&self) -> RepositoryResult<Vec<Average>>;

    /// Look up one row by its key.
    async fn find_average_by_id(&self, id: AverageId) -> RepositoryResult<Option<Average>>;
}
