//! Group models for the Zammad API.

use serde::{Deserialize, Serialize};

use super::common::{deserialize_null_as_default, text_or_missing, EntityId, ExtraFields};

/// A ticket group (queue).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Unique group ID.
    pub id: EntityId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

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

impl Group {
    /// Returns the group name, falling back to the id.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Returns the creation timestamp.
    pub fn display_created(&self) -> &str {
        text_or_missing(self.created_at.as_deref())
    }

    /// Returns the last-update timestamp.
    pub fn display_updated(&self) -> &str {
        text_or_missing(self.updated_at.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_deserialize() {
        let json = r#"{"id": 1, "name": "Users", "active": true, "email_address_id": 1}"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.display_name(), "Users");
        assert!(group.active);
        assert!(group.extra.contains_key("email_address_id"));
    }

    #[test]
    fn test_group_display_name_falls_back_to_id() {
        let group: Group = serde_json::from_str(r#"{"id": 4, "name": ""}"#).unwrap();
        assert_eq!(group.display_name(), "4");
        assert_eq!(group.display_created(), "-");
    }

    #[test]
    fn test_group_null_active_reads_as_false() {
        let group: Group = serde_json::from_str(r#"{"id": 2, "active": null}"#).unwrap();
        assert!(!group.active);
    }
}
