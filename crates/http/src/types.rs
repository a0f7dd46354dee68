//! Wire types exchanged with the remote API

use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// One entry of the role list returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleEntry {
    pub role_name: String,
}

/// Login response body
///
/// Every field is optional on the wire so that a malformed success response
/// surfaces as an integrity problem in the caller instead of a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role_name: Vec<RoleEntry>,
}

impl LoginResponse {
    /// The authoritative role: the first element of the role list
    pub fn primary_role(&self) -> Option<&str> {
        self.role_name.first().map(|entry| entry.role_name.as_str())
    }
}

/// "About me" content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A social network link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A portfolio project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_uses_camel_case_keys() {
        let response: LoginResponse = serde_json::from_value(json!({
            "accessToken": "tok1",
            "refreshToken": "ref1",
            "userId": "u1",
            "roleName": [{"roleName": "editor"}, {"roleName": "admin"}]
        }))
        .unwrap();

        assert_eq!(response.access_token.as_deref(), Some("tok1"));
        assert_eq!(response.refresh_token.as_deref(), Some("ref1"));
        assert_eq!(response.user_id.as_deref(), Some("u1"));
        // Only the first role counts
        assert_eq!(response.primary_role(), Some("editor"));
    }

    #[test]
    fn test_login_response_tolerates_missing_fields() {
        let response: LoginResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response, LoginResponse::default());
        assert_eq!(response.primary_role(), None);
    }

    #[test]
    fn test_new_records_omit_id() {
        let link = SocialLink {
            id: None,
            name: "GitHub".to_string(),
            url: "https://github.com/folio".to_string(),
            icon: None,
        };
        let value = serde_json::to_value(&link).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "GitHub");

        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "title": "Folio",
            "repositoryUrl": "https://github.com/folio/folio"
        }))
        .unwrap();
        assert_eq!(project.id.as_deref(), Some("p1"));
        assert_eq!(
            project.repository_url.as_deref(),
            Some("https://github.com/folio/folio")
        );
        assert!(project.technologies.is_empty());
    }
}
