//! User models for the Zammad API.

use serde::{Deserialize, Serialize};

use super::common::{deserialize_null_as_default, text_or_missing, EntityId, ExtraFields};

/// A Zammad user (agent, customer or admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: EntityId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<EntityId>,

    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub role_ids: Vec<EntityId>,

    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl User {
    /// Returns "first last", falling back to the login, then the id.
    pub fn display_name(&self) -> String {
        let full = [self.firstname.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !full.is_empty() {
            full
        } else if let Some(login) = self.login.as_deref().filter(|l| !l.is_empty()) {
            login.to_string()
        } else {
            self.id.to_string()
        }
    }

    /// Returns the login name.
    pub fn display_login(&self) -> &str {
        text_or_missing(self.login.as_deref())
    }

    /// Returns the email address.
    pub fn display_email(&self) -> &str {
        text_or_missing(self.email.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize() {
        let json = r#"{
            "id": 3,
            "login": "nicole.braun@zammad.org",
            "firstname": "Nicole",
            "lastname": "Braun",
            "email": "nicole.braun@zammad.org",
            "role_ids": [3],
            "active": true,
            "vip": false
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.display_name(), "Nicole Braun");
        assert_eq!(user.role_ids, vec![3]);
        assert!(user.active);
        assert_eq!(user.extra.get("vip"), Some(&serde_json::json!(false)));
    }

    #[test]
    fn test_user_display_name_fallbacks() {
        let user: User = serde_json::from_str(r#"{"id": 9, "login": "jdoe", "firstname": ""}"#)
            .unwrap();
        assert_eq!(user.display_name(), "jdoe");

        let user: User = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(user.display_name(), "9");
        assert_eq!(user.display_email(), "-");
        assert!(!user.active);
        assert!(user.role_ids.is_empty());
    }

    #[test]
    fn test_user_null_flags_use_defaults() {
        let user: User =
            serde_json::from_str(r#"{"id": 5, "active": null, "role_ids": null}"#).unwrap();
        assert!(!user.active);
        assert!(user.role_ids.is_empty());
    }
}
