//! Data Accessor trait for projects
//!
//! Uses RPITIT (Return Position Impl Trait In Traits) so implementations can
//! be written as plain `async fn` without `async_trait`.

use std::future::Future;

use super::error::RepositoryError;
use crate::projects::{NewProject, Project, ProjectPatch};

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Row-level project storage keyed by primary id
///
/// Every method performs exactly one statement against the backing store.
///
/// # Example
///
/// ```rust,ignore
/// use projects_service::repository::{ProjectRepository, RepositoryResult};
///
/// impl ProjectRepository for MyStore {
///     async fn list(&self) -> RepositoryResult<Vec<Project>> {
///         // SELECT * FROM projects ORDER BY id
///         todo!()
///     }
///     // ... other methods
/// }
/// ```
pub trait ProjectRepository: Send + Sync {
    /// Every project, ordered by id
    fn list(&self) -> impl Future<Output = RepositoryResult<Vec<Project>>> + Send;

    /// Find a project by id
    ///
    /// Returns `Ok(None)` when no row has that id.
    fn find_by_id(&self, id: i64) -> impl Future<Output = RepositoryResult<Option<Project>>> + Send;

    /// Insert a project, assigning `id` and `date_created`
    fn insert(&self, project: NewProject) -> impl Future<Output = RepositoryResult<Project>> + Send;

    /// Delete a project, returning the number of rows removed
    fn delete_by_id(&self, id: i64) -> impl Future<Output = RepositoryResult<u64>> + Send;

    /// Apply a partial update, returning the number of rows changed
    fn update(
        &self,
        id: i64,
        patch: ProjectPatch,
    ) -> impl Future<Output = RepositoryResult<u64>> + Send;
}
