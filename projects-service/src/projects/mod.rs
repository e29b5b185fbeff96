//! Project entity, payload validation and output sanitization

mod model;
mod sanitize;
mod validate;

pub use model::{NewProject, Project, ProjectPatch, ProjectResponse, UserId};
pub use sanitize::{html_escape, sanitize_for_output};
pub use validate::{is_truthy, validate_create, validate_update, ValidationError, REQUIRED_FIELDS};
