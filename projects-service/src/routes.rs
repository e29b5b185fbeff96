//! HTTP routes for the projects collection
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/` | 200, array of projects |
//! | POST | `/` | 201 + `Location`, created project |
//! | GET | `/{project_id}` | 200, project |
//! | DELETE | `/{project_id}` | 204 |
//! | PATCH | `/{project_id}` | 204 |
//!
//! Paths are relative to `api.mount_path`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        OriginalUri, Path, State,
    },
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};

use crate::{
    handlers::{ApiError, ApiOperation},
    health::health,
    projects::ProjectResponse,
    repository::ProjectRepository,
    responses::{Created, NoContent},
    state::AppState,
};

/// Build the full application router: the projects collection under the
/// configured mount path plus `/health`
pub fn app<R>(state: AppState<R>) -> Router
where
    R: ProjectRepository + 'static,
{
    let mount_path = state.config().mount_path().to_string();

    let router = if mount_path == "/" {
        Router::new().merge(projects_router::<R>())
    } else {
        Router::new().nest(&mount_path, projects_router::<R>())
    };

    router.route("/health", get(health::<R>)).with_state(state)
}

/// Routes for the projects collection, relative to its mount path
pub fn projects_router<R>() -> Router<AppState<R>>
where
    R: ProjectRepository + 'static,
{
    Router::new()
        .route("/", get(list_projects::<R>).post(create_project::<R>))
        .route(
            "/{project_id}",
            get(get_project::<R>)
                .delete(delete_project::<R>)
                .patch(update_project::<R>),
        )
}

async fn list_projects<R: ProjectRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    Ok(Json(state.projects().list().await?))
}

async fn create_project<R: ProjectRepository>(
    State(state): State<AppState<R>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Created<ProjectResponse>, ApiError> {
    let payload = read_payload(ApiOperation::Create, body)?;
    let project = state.projects().create(&payload).await?;
    let location = location_for(uri.path(), project.id);

    Ok(Created::new(project).with_location(location))
}

async fn get_project<R: ProjectRepository>(
    State(state): State<AppState<R>>,
    project_id: Result<Path<String>, PathRejection>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project_id = read_project_id(ApiOperation::Get, project_id)?;
    Ok(Json(state.projects().get(&project_id).await?))
}

async fn delete_project<R: ProjectRepository>(
    State(state): State<AppState<R>>,
    project_id: Result<Path<String>, PathRejection>,
) -> Result<NoContent, ApiError> {
    let project_id = read_project_id(ApiOperation::Delete, project_id)?;
    state.projects().delete(&project_id).await?;
    Ok(NoContent)
}

async fn update_project<R: ProjectRepository>(
    State(state): State<AppState<R>>,
    project_id: Result<Path<String>, PathRejection>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<NoContent, ApiError> {
    let project_id = read_project_id(ApiOperation::Update, project_id)?;
    let payload = read_payload(ApiOperation::Update, body)?;
    state.projects().update(&project_id, &payload).await?;
    Ok(NoContent)
}

/// Unwrap the id path segment
///
/// A segment that cannot be decoded names no project.
fn read_project_id(
    operation: ApiOperation,
    project_id: Result<Path<String>, PathRejection>,
) -> Result<String, ApiError> {
    project_id.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Undecodable project id: {}", rejection.body_text());
        ApiError::not_found(operation, "<undecodable>")
    })
}

/// Unwrap a JSON object body
///
/// A request without a JSON content type carries no fields, so validation
/// reports what is missing. A body that is not a JSON object is rejected.
fn read_payload(
    operation: ApiOperation,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Map<String, Value>, ApiError> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Map::new()),
        Err(rejection) => Err(ApiError::malformed_body(operation, &rejection)),
    }
}

/// `Location` of a newly created project: the collection URL plus its id
pub fn location_for(collection_path: &str, id: i64) -> String {
    format!("{}/{}", collection_path.trim_end_matches('/'), id)
}
