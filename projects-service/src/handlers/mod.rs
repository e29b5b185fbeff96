//! HTTP-facing handlers for the projects collection
//!
//! - [`ProjectsHandler`]: list, get, create, update and delete orchestration
//! - [`ApiError`]: request failures with fixed status-code mapping

mod error;
mod projects;

pub use error::{
    ApiError, ApiErrorKind, ApiOperation, ErrorDetail, ErrorResponse, INTERNAL_ERROR_MESSAGE,
    NOT_FOUND_MESSAGE,
};
pub use projects::{parse_project_id, ProjectsHandler};
