//! Ticket article models for the Zammad API.
//!
//! Articles are the individual messages (emails, notes, phone logs)
//! attached to a ticket.

use serde::{Deserialize, Serialize};

use super::common::{
    deserialize_null_as_default, deserialize_optional_string_or_int, name_or_id, text_or_missing,
    EntityId, ExtraFields,
};

/// A single article on a ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique article ID.
    pub id: EntityId,

    /// Ticket this article belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<EntityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Message body; HTML when `content_type` is `text/html`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Article type name (e.g., "email", "note").
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_optional_string_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub article_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<EntityId>,

    /// Sender role name (e.g., "Customer", "Agent").
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<EntityId>,

    /// Whether the article is hidden from the customer.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub internal: bool,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<EntityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Article {
    /// Returns the sender address line.
    pub fn display_from(&self) -> &str {
        text_or_missing(self.from.as_deref())
    }

    /// Returns the article type name, or its id.
    pub fn display_type(&self) -> String {
        name_or_id(self.article_type.as_deref(), self.type_id)
    }

    /// Returns the sender role name, or its id.
    pub fn display_sender(&self) -> String {
        name_or_id(self.sender.as_deref(), self.sender_id)
    }

    /// Returns the author's name, or their user id.
    pub fn display_created_by(&self) -> String {
        name_or_id(self.created_by.as_deref(), self.created_by_id)
    }

    /// Returns the creation timestamp.
    pub fn display_created(&self) -> &str {
        text_or_missing(self.created_at.as_deref())
    }

    /// Returns the raw body, empty if absent.
    pub fn raw_body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}
