//! In-process project repository
//!
//! Used when no database is configured and by the test suite. Rows live in an
//! id-ordered map behind a `tokio::sync::RwLock`.

use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::traits::{ProjectRepository, RepositoryResult};
use crate::projects::{NewProject, Project, ProjectPatch};

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i64, Project>,
    next_id: i64,
}

/// Project repository held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    store: RwLock<Store>,
}

impl InMemoryProjectRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with existing rows
    ///
    /// Seeded rows keep their ids and timestamps; new inserts continue after
    /// the highest seeded id.
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let rows: BTreeMap<i64, Project> = projects.into_iter().map(|p| (p.id, p)).collect();
        let next_id = rows.keys().next_back().copied().unwrap_or(0);
        Self {
            store: RwLock::new(Store { rows, next_id }),
        }
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.store.read().await.rows.len()
    }

    /// True when no rows are stored
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.rows.is_empty()
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        Ok(self.store.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Project>> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, project: NewProject) -> RepositoryResult<Project> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let created = Project {
            id: store.next_id,
            user_id: project.user_id,
            client_id: Some(project.client_id),
            project_name: project.project_name,
            content: Some(project.content),
            date_created: Utc::now(),
        };
        store.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<u64> {
        let removed = self.store.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn update(&self, id: i64, patch: ProjectPatch) -> RepositoryResult<u64> {
        let mut store = self.store.write().await;
        match store.rows.get_mut(&id) {
            Some(project) => {
                patch.apply_to(project);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
