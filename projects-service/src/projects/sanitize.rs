//! Output sanitization
//!
//! User-supplied text is HTML-escaped before it leaves the service so that
//! markup and script stored in a project render as inert text.

use super::model::{Project, ProjectResponse};

/// Escape HTML-significant characters
///
/// Covers text content and quoted or unquoted attribute contexts, so tag
/// injection and `onerror=`-style handler injection both come out inert.
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build the outbound representation of a stored project
///
/// `project_name` and `client_id` are escaped; a null `client_id` stays null.
/// `id`, `user_id` and `date_created` pass through untouched and `content` is
/// never echoed.
pub fn sanitize_for_output(project: &Project) -> ProjectResponse {
    ProjectResponse {
        id: project.id,
        user_id: project.user_id.clone(),
        client_id: project.client_id.as_deref().map(html_escape),
        project_name: html_escape(&project.project_name),
        date_created: project.date_created,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::model::UserId;
    use chrono::{TimeZone, Utc};

    fn malicious_project() -> Project {
        Project {
            id: 911,
            user_id: Some(UserId::Text(
                r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#
                    .to_string(),
            )),
            client_id: Some("How-to".to_string()),
            project_name: r#"Naughty naughty very naughty <script>alert("xss");</script>"#
                .to_string(),
            content: Some("<b>hidden</b>".to_string()),
            date_created: Utc.with_ymd_and_hms(2029, 1, 22, 16, 28, 32).unwrap(),
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("test"), "test");
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"hello\""), "&quot;hello&quot;");
        assert_eq!(html_escape("a&b"), "a&amp;b");
        assert_eq!(html_escape("it's"), "it&#x27;s");
        assert_eq!(html_escape(""), "");
    }

    #[test]
    fn test_escapes_script_in_project_name() {
        let output = sanitize_for_output(&malicious_project());
        assert_eq!(
            output.project_name,
            "Naughty naughty very naughty &lt;script&gt;alert(&quot;xss&quot;);&lt;/script&gt;"
        );
        assert!(!output.project_name.contains("<script>"));
    }

    #[test]
    fn test_neutralizes_attribute_injection() {
        let mut project = malicious_project();
        project.client_id = Some(r#"<img src=x onerror="alert(1)">"#.to_string());

        let client_id = sanitize_for_output(&project).client_id.unwrap();
        assert!(!client_id.contains('<'));
        assert!(!client_id.contains('"'));
        assert_eq!(client_id, "&lt;img src=x onerror=&quot;alert(1)&quot;&gt;");
    }

    #[test]
    fn test_null_client_id_stays_null() {
        let mut project = malicious_project();
        project.client_id = None;
        assert_eq!(sanitize_for_output(&project).client_id, None);
    }

    #[test]
    fn test_other_fields_pass_through() {
        let project = malicious_project();
        let output = sanitize_for_output(&project);
        assert_eq!(output.id, project.id);
        assert_eq!(output.user_id, project.user_id);
        assert_eq!(output.date_created, project.date_created);
        assert_eq!(output.client_id.as_deref(), Some("How-to"));
    }

    #[test]
    fn test_output_does_not_echo_content() {
        let value = serde_json::to_value(sanitize_for_output(&malicious_project())).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert!(!keys.contains(&"content"));
        assert_eq!(keys.len(), 5);
    }
}
