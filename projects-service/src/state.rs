//! Application state management

use std::sync::Arc;

use crate::{config::Config, handlers::ProjectsHandler, repository::ProjectRepository};

/// Application state shared across handlers
///
/// Generic over the Data Accessor so the same router runs over Postgres or
/// the in-memory store.
pub struct AppState<R> {
    config: Arc<Config>,
    projects: ProjectsHandler<R>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            projects: self.projects.clone(),
        }
    }
}

impl<R: ProjectRepository> AppState<R> {
    /// Create state from a configuration and a repository
    pub fn new(config: Config, repository: R) -> Self {
        Self::with_shared(config, Arc::new(repository))
    }

    /// Create state around an already shared repository
    pub fn with_shared(config: Config, repository: Arc<R>) -> Self {
        Self {
            config: Arc::new(config),
            projects: ProjectsHandler::new(repository),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the projects handler
    pub fn projects(&self) -> &ProjectsHandler<R> {
        &self.projects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryProjectRepository;

    #[tokio::test]
    async fn test_clones_share_repository() {
        let repository = Arc::new(InMemoryProjectRepository::new());
        let state = AppState::with_shared(Config::default(), Arc::clone(&repository));
        let cloned = state.clone();

        assert!(cloned.projects().list().await.unwrap().is_empty());
        assert_eq!(Arc::strong_count(&repository), 3);
        assert_eq!(cloned.config().service.port, state.config().service.port);
    }
}
