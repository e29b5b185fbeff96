//! Inbound payload validation
//!
//! Payloads arrive as arbitrary JSON objects. Create requires every field in
//! [`REQUIRED_FIELDS`]; update needs at least one of them to be truthy.

use serde_json::{Map, Value};
use thiserror::Error;

use super::model::{NewProject, ProjectPatch, UserId};

/// Fields checked on create, in reporting order
pub const REQUIRED_FIELDS: [&str; 3] = ["project_name", "client_id", "content"];

/// Reasons a payload is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required create field is absent or null
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    /// An update carried none of the updatable fields
    #[error("Request body must content either 'project_name', 'client_id' or 'content'")]
    NoUpdatableFields,
}

/// Validate a create payload
///
/// Reports the first missing field in [`REQUIRED_FIELDS`] order. Values of
/// any non-null shape are accepted and normalized to text.
pub fn validate_create(payload: &Map<String, Value>) -> Result<NewProject, ValidationError> {
    let [project_name, client_id, content] = REQUIRED_FIELDS.map(|field| {
        payload
            .get(field)
            .filter(|value| !value.is_null())
            .map(normalize_text)
            .ok_or(ValidationError::MissingField(field))
    });

    Ok(NewProject {
        project_name: project_name?,
        client_id: client_id?,
        content: content?,
        user_id: payload.get("user_id").and_then(user_id_from_value),
    })
}

/// Validate a partial update payload
///
/// Unknown keys are ignored. Falsy values (`null`, `false`, `0`, `""`) count
/// as absent, so they neither satisfy the check nor get persisted.
pub fn validate_update(payload: &Map<String, Value>) -> Result<ProjectPatch, ValidationError> {
    let [project_name, client_id, content] = REQUIRED_FIELDS.map(|field| {
        payload
            .get(field)
            .filter(|value| is_truthy(value))
            .map(normalize_text)
    });

    let patch = ProjectPatch {
        project_name,
        client_id,
        content,
    };

    if patch.is_empty() {
        return Err(ValidationError::NoUpdatableFields);
    }

    Ok(patch)
}

/// JavaScript-style truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn normalize_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn user_id_from_value(value: &Value) -> Option<UserId> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(
            n.as_i64()
                .map(UserId::Number)
                .unwrap_or_else(|| UserId::Text(n.to_string())),
        ),
        other => Some(UserId::Text(normalize_text(other))),
    }
}
