//! # projects-service
//!
//! REST resource service for client projects: list, fetch, create, update
//! and delete over HTTP, backed by PostgreSQL or an in-memory store.
//!
//! ## Features
//!
//! - **Output sanitization**: `project_name` and `client_id` are HTML-escaped on every response
//! - **Validation**: required fields on create, at least one updatable field on patch
//! - **Existence guard**: fetch, update and delete answer 404 for unknown ids
//! - **Middleware stack**: request tracking, panic recovery, body size limits, compression, CORS
//! - **Connection pooling**: PostgreSQL with retry and embedded migrations
//! - **Graceful shutdown**: Proper signal handling (SIGTERM, SIGINT)
//!
//! ## Example
//!
//! ```rust,no_run
//! use projects_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::new(config.clone(), InMemoryProjectRepository::new());
//!
//!     Server::new(config).serve(app(state)).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod observability;
pub mod projects;
pub mod repository;
pub mod responses;
pub mod routes;
pub mod server;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ApiConfig, Config, DatabaseConfig, MiddlewareConfig, ServiceConfig};
    pub use crate::database::{create_pool, run_migrations};
    pub use crate::error::{DatabaseError, DatabaseOperation, Error, Result};
    pub use crate::handlers::{ApiError, ApiErrorKind, ApiOperation, ProjectsHandler};
    pub use crate::health::health;
    pub use crate::middleware::{
        request_id_layer, request_id_propagation_layer, sensitive_headers_layer, SENSITIVE_HEADERS,
    };
    pub use crate::observability::init_tracing;
    pub use crate::projects::{
        sanitize_for_output, NewProject, Project, ProjectPatch, ProjectResponse, UserId,
    };
    pub use crate::repository::{
        InMemoryProjectRepository, PgProjectRepository, ProjectRepository, RepositoryError,
    };
    pub use crate::responses::{Created, NoContent};
    pub use crate::routes::app;
    pub use crate::server::Server;
    pub use crate::state::AppState;

    pub use axum::{extract::State, routing::get, Json, Router};
    pub use serde::{Deserialize, Serialize};
    pub use tracing::{debug, error, info, warn};
}
