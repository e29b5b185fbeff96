//! PostgreSQL-backed project repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{ProjectRepository, RepositoryResult};
use crate::projects::{NewProject, Project, ProjectPatch, UserId};

const PROJECT_COLUMNS: &str = "id, user_id, client_id, project_name, content, date_created";

#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    user_id: Option<String>,
    client_id: Option<String>,
    project_name: String,
    content: Option<String>,
    date_created: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id.map(UserId::from_stored),
            client_id: row.client_id,
            project_name: row.project_name,
            content: row.content,
            date_created: row.date_created,
        }
    }
}

/// Project repository over a `projects` table
#[derive(Debug, Clone)]
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    /// Wrap an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl ProjectRepository for PgProjectRepository {
    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        let sql = format!("SELECT {} FROM projects ORDER BY id", PROJECT_COLUMNS);
        let rows = sqlx::query_as::<_, ProjectRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::List, e))?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Project>> {
        let sql = format!("SELECT {} FROM projects WHERE id = $1", PROJECT_COLUMNS);
        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::from_sqlx(RepositoryOperation::FindById, e).with_project_id(id)
            })?;

        Ok(row.map(Project::from))
    }

    async fn insert(&self, project: NewProject) -> RepositoryResult<Project> {
        let sql = format!(
            "INSERT INTO projects (project_name, client_id, content, user_id) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            PROJECT_COLUMNS
        );
        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(project.project_name)
            .bind(project.client_id)
            .bind(project.content)
            .bind(project.user_id.as_ref().map(UserId::to_stored))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::Insert, e))?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<u64> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::from_sqlx(RepositoryOperation::Delete, e).with_project_id(id)
            })?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: i64, patch: ProjectPatch) -> RepositoryResult<u64> {
        let result = sqlx::query(
            "UPDATE projects SET \
                project_name = COALESCE($2, project_name), \
                client_id = COALESCE($3, client_id), \
                content = COALESCE($4, content) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(patch.project_name)
        .bind(patch.client_id)
        .bind(patch.content)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::Update, e).with_project_id(id))?;

        Ok(result.rows_affected())
    }
}
