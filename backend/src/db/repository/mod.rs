//! Repository trait definitions for database operations.
//!
//! Each stored entity gets its own narrow read-only trait exposing exactly the
//! lookups the API needs. There is no generic CRUD abstraction.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`games`]: Games, including the by-date and date-listing lookups
//! - [`averages`]: Player averages
//! - [`positions`]: Player positions
//! - [`usage`]: Top usage players per team
//! - [`defense`]: Defensive efficiency per team
//!
//! # Convenience Trait Bound
//!
//! For code that needs every table, use the [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn dashboard<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<()> {
//!     let games = repo.find_games_by_date(today).await?;
//!     let usage = repo.find_all_top_usage().await?;
//!     Ok(())
//! }
//! ```

pub mod averages;
pub mod defense;
pub mod error;
pub mod games;
pub mod positions;
pub mod usage;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use averages::AverageRepository;
pub use defense::DefensiveEfficiencyRepository;
pub use games::GameRepository;
pub use positions::PositionRepository;
pub use usage::TopUsageRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements all five
/// entity traits.
pub trait FullRepository:
    GameRepository
    + AverageRepository
    + PositionRepository
    + TopUsageRepository
    + DefensiveEfficiencyRepository
{
}

// Blanket implementation: any type implementing all five traits automatically implements FullRepository
impl<T> FullRepository for T where
    T: GameRepository
        + AverageRepository
        + PositionRepository
        + TopUsageRepository
        + DefensiveEfficiencyRepository
{
}
