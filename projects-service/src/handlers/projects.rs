//! Resource handler for the projects collection
//!
//! Each method runs one logical operation against the Data Accessor and
//! returns either the sanitized output or an [`ApiError`]. Get, update and
//! delete share [`ProjectsHandler::require_project`], which resolves the id
//! and hands the record to the next step.

use serde_json::{Map, Value};
use std::sync::Arc;

use super::error::{ApiError, ApiOperation};
use crate::projects::{
    sanitize_for_output, validate_create, validate_update, Project, ProjectResponse,
};
use crate::repository::ProjectRepository;

/// Parse a path segment into a project id
///
/// Anything that is not an integer cannot name a stored project.
pub fn parse_project_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Projects collection handler over a [`ProjectRepository`]
pub struct ProjectsHandler<R> {
    repository: Arc<R>,
}

impl<R> Clone for ProjectsHandler<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProjectRepository> ProjectsHandler<R> {
    /// Create a handler over a shared repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// The underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Resolve `raw_id` to a stored project or fail with 404
    pub async fn require_project(
        &self,
        operation: ApiOperation,
        raw_id: &str,
    ) -> Result<Project, ApiError> {
        let Some(id) = parse_project_id(raw_id) else {
            return Err(ApiError::not_found(operation, raw_id));
        };

        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| ApiError::storage(operation, e))?
            .ok_or_else(|| ApiError::not_found(operation, id))
    }

    /// All projects, sanitized
    pub async fn list(&self) -> Result<Vec<ProjectResponse>, ApiError> {
        let projects = self
            .repository
            .list()
            .await
            .map_err(|e| ApiError::storage(ApiOperation::List, e))?;

        tracing::debug!(count = projects.len(), "Listed projects");

        Ok(projects.iter().map(sanitize_for_output).collect())
    }

    /// One project, sanitized
    pub async fn get(&self, raw_id: &str) -> Result<ProjectResponse, ApiError> {
        let project = self.require_project(ApiOperation::Get, raw_id).await?;
        Ok(sanitize_for_output(&project))
    }

    /// Validate and insert a project, returning the sanitized stored row
    pub async fn create(&self, payload: &Map<String, Value>) -> Result<ProjectResponse, ApiError> {
        let new_project = validate_create(payload)
            .map_err(|e| ApiError::validation(ApiOperation::Create, e))?;

        let project = self
            .repository
            .insert(new_project)
            .await
            .map_err(|e| ApiError::storage(ApiOperation::Create, e))?;

        tracing::info!(project_id = project.id, "Created project");

        Ok(sanitize_for_output(&project))
    }

    /// Delete an existing project
    pub async fn delete(&self, raw_id: &str) -> Result<(), ApiError> {
        let project = self.require_project(ApiOperation::Delete, raw_id).await?;

        let affected = self
            .repository
            .delete_by_id(project.id)
            .await
            .map_err(|e| ApiError::storage(ApiOperation::Delete, e))?;

        tracing::info!(project_id = project.id, affected, "Deleted project");

        Ok(())
    }

    /// Apply a partial update to an existing project
    pub async fn update(&self, raw_id: &str, payload: &Map<String, Value>) -> Result<(), ApiError> {
        let project = self.require_project(ApiOperation::Update, raw_id).await?;

        let patch = validate_update(payload).map_err(|e| {
            ApiError::validation(ApiOperation::Update, e).with_project_id(project.id)
        })?;

        let affected = self
            .repository
            .update(project.id, patch)
            .await
            .map_err(|e| ApiError::storage(ApiOperation::Update, e))?;

        tracing::info!(project_id = project.id, affected, "Updated project");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::error::{ApiErrorKind, NOT_FOUND_MESSAGE};
    use crate::projects::UserId;
    use crate::repository::InMemoryProjectRepository;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn handler_with(projects: Vec<Project>) -> ProjectsHandler<InMemoryProjectRepository> {
        ProjectsHandler::new(Arc::new(InMemoryProjectRepository::with_projects(projects)))
    }

    fn fixture() -> Project {
        Project {
            id: 2,
            user_id: Some(UserId::Number(1)),
            client_id: Some("xyz".to_string()),
            project_name: "Build SMTP API".to_string(),
            content: None,
            date_created: Utc.with_ymd_and_hms(2100, 5, 22, 16, 28, 32).unwrap(),
        }
    }

    #[test]
    fn test_parse_project_id() {
        assert_eq!(parse_project_id("2"), Some(2));
        assert_eq!(parse_project_id("abc"), None);
        assert_eq!(parse_project_id("1.5"), None);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_for_every_operation() {
        let handler = handler_with(vec![]);

        let err = handler.get("123456").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.message, NOT_FOUND_MESSAGE);

        let err = handler.delete("123456").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);

        let err = handler
            .update("123456", &payload(json!({ "project_name": "x" })))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let handler = handler_with(vec![fixture()]);
        let err = handler.get("not-a-number").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_checks_existence_before_payload() {
        let handler = handler_with(vec![]);
        let err = handler.update("9", &Map::new()).await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_without_fields_leaves_row_untouched() {
        let handler = handler_with(vec![fixture()]);
        let err = handler
            .update("2", &payload(json!({ "irrelevantField": "foo" })))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NoUpdatableFields);

        let stored = handler.repository().find_by_id(2).await.unwrap().unwrap();
        assert_eq!(stored, fixture());
    }

    #[tokio::test]
    async fn test_create_does_not_insert_invalid_payload() {
        let handler = handler_with(vec![]);
        let err = handler
            .create(&payload(json!({ "project_name": "x", "client_id": "y" })))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::MissingField);
        assert_eq!(err.message, "Missing 'content' in request body");
        assert!(handler.repository().is_empty().await);
    }

    #[tokio::test]
    async fn test_create_sanitizes_output() {
        let handler = handler_with(vec![]);
        let created = handler
            .create(&payload(json!({
                "project_name": "X <script>alert(1)</script>",
                "client_id": "abc",
                "content": "c"
            })))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(
            created.project_name,
            "X &lt;script&gt;alert(1)&lt;/script&gt;"
        );

        let stored = handler.repository().find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.project_name, "X <script>alert(1)</script>");
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let handler = handler_with(vec![fixture()]);
        handler.delete("2").await.unwrap();
        assert!(handler.list().await.unwrap().is_empty());
    }
}
