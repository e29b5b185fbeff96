//! Project entity and its inbound/outbound shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner identifier of a project
///
/// Stored as text. Integral values round-trip as JSON numbers, anything else
/// stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    /// Numeric identifier
    Number(i64),
    /// Free-text identifier
    Text(String),
}

impl UserId {
    /// Rebuild from the stored text column
    pub fn from_stored(raw: String) -> Self {
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => Self::Number(n),
            _ => Self::Text(raw),
        }
    }

    /// Text form written to storage
    pub fn to_stored(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A stored project row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub user_id: Option<UserId>,
    pub client_id: Option<String>,
    pub project_name: String,
    pub content: Option<String>,
    pub date_created: DateTime<Utc>,
}

/// Validated creation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub project_name: String,
    pub client_id: String,
    pub content: String,
    pub user_id: Option<UserId>,
}

/// Validated partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub project_name: Option<String>,
    pub client_id: Option<String>,
    pub content: Option<String>,
}

impl ProjectPatch {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.project_name.is_none() && self.client_id.is_none() && self.content.is_none()
    }

    /// Apply the patch in place
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(ref project_name) = self.project_name {
            project.project_name = project_name.clone();
        }
        if let Some(ref client_id) = self.client_id {
            project.client_id = Some(client_id.clone());
        }
        if let Some(ref content) = self.content {
            project.content = Some(content.clone());
        }
    }
}

/// Outbound JSON representation of a project
///
/// Only produced by [`crate::projects::sanitize_for_output`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub user_id: Option<UserId>,
    pub client_id: Option<String>,
    pub project_name: String,
    pub date_created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_id_from_stored() {
        assert_eq!(UserId::from_stored("1".to_string()), UserId::Number(1));
        assert_eq!(UserId::from_stored("-42".to_string()), UserId::Number(-42));
        assert_eq!(
            UserId::from_stored("007".to_string()),
            UserId::Text("007".to_string())
        );
        assert_eq!(
            UserId::from_stored("usr_abc".to_string()),
            UserId::Text("usr_abc".to_string())
        );
    }

    #[test]
    fn test_user_id_serialization() {
        assert_eq!(serde_json::to_value(UserId::Number(2)).unwrap(), json!(2));
        assert_eq!(
            serde_json::to_value(UserId::from("<b>x</b>")).unwrap(),
            json!("<b>x</b>")
        );
        assert_eq!(UserId::Number(7).to_stored(), "7");
    }

    #[test]
    fn test_patch_apply_leaves_missing_fields() {
        let mut project = Project {
            id: 2,
            user_id: Some(UserId::Number(1)),
            client_id: Some("xyz".to_string()),
            project_name: "Build SMTP API".to_string(),
            content: None,
            date_created: Utc::now(),
        };
        let patch = ProjectPatch {
            project_name: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());

        patch.apply_to(&mut project);
        assert_eq!(project.project_name, "Renamed");
        assert_eq!(project.client_id.as_deref(), Some("xyz"));
        assert!(ProjectPatch::default().is_empty());
    }
}
