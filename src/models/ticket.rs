//! Ticket models for the Zammad API.
//!
//! This module defines the ticket record as returned by the API and the
//! request bodies used to create and update tickets.

use serde::{Deserialize, Serialize};

use super::common::{
    deserialize_optional_string_or_int, name_or_id, text_or_missing, EntityId, ExtraFields,
};

/// Default priority id used when creating a ticket ("2 normal").
pub const DEFAULT_PRIORITY_ID: EntityId = 2;

/// Default state id used when creating a ticket ("new").
pub const DEFAULT_STATE_ID: EntityId = 1;

/// A ticket record.
///
/// Relational fields come as a name (when expanded) and/or an id; use the
/// `display_*` accessors rather than reading either field directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID.
    pub id: EntityId,

    /// Human-facing ticket number (e.g., "31001").
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,

    /// Title of the ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<EntityId>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<EntityId>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<EntityId>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<EntityId>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_string_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<EntityId>,

    /// Organization of the customer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<EntityId>,

    /// Creation timestamp (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Ticket {
    /// Returns the ticket number, falling back to the id.
    pub fn display_number(&self) -> String {
        self.number
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Returns the title or a placeholder.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(No title)")
    }

    /// Returns the state name, or its id.
    pub fn display_state(&self) -> String {
        name_or_id(self.state.as_deref(), self.state_id)
    }

    /// Returns the priority name, or its id.
    pub fn display_priority(&self) -> String {
        name_or_id(self.priority.as_deref(), self.priority_id)
    }

    /// Returns the group name, or its id.
    pub fn display_group(&self) -> String {
        name_or_id(self.group.as_deref(), self.group_id)
    }

    /// Returns the owner's name, or their user id.
    pub fn display_owner(&self) -> String {
        name_or_id(self.owner.as_deref(), self.owner_id)
    }

    /// Returns the customer's name, or their user id.
    pub fn display_customer(&self) -> String {
        name_or_id(self.customer.as_deref(), self.customer_id)
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

/// Initial article attached to a newly created ticket.
#[derive(Debug, Clone, Serialize)]
pub struct NewArticle {
    /// Article subject, usually the ticket title.
    pub subject: String,

    /// Article body.
    pub body: String,

    /// Article type name, e.g. "note".
    #[serde(rename = "type")]
    pub article_type: String,

    /// Whether the article is hidden from the customer.
    pub internal: bool,
}

impl NewArticle {
    /// Creates a public note article.
    pub fn note(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            article_type: "note".to_string(),
            internal: false,
        }
    }
}

/// Request body for `POST /tickets`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTicket {
    pub title: String,
    pub group_id: EntityId,
    pub priority_id: EntityId,
    pub state_id: EntityId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<NewArticle>,
}

impl CreateTicket {
    /// Creates a ticket body with default priority and state.
    pub fn new(title: impl Into<String>, group_id: EntityId) -> Self {
        Self {
            title: title.into(),
            group_id,
            priority_id: DEFAULT_PRIORITY_ID,
            state_id: DEFAULT_STATE_ID,
            customer_id: None,
            article: None,
        }
    }

    pub fn with_priority(mut self, priority_id: EntityId) -> Self {
        self.priority_id = priority_id;
        self
    }

    pub fn with_state(mut self, state_id: EntityId) -> Self {
        self.state_id = state_id;
        self
    }

    pub fn with_customer(mut self, customer_id: EntityId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Attaches a first article whose subject is the ticket title.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.article = Some(NewArticle::note(self.title.clone(), body));
        self
    }
}

/// Request body for `PUT /tickets/{id}`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTicket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<EntityId>,
}

impl UpdateTicket {
    /// Returns true if at least one field would be changed.
    pub fn has_updates(&self) -> bool {
        self.title.is_some()
            || self.state_id.is_some()
            || self.priority_id.is_some()
            || self.group_id.is_some()
            || self.owner_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expanded_ticket_json() -> &'static str {
        r#"{
            "id": 42,
            "number": "31042",
            "title": "Printer on fire",
            "state": "open",
            "state_id": 2,
            "priority": "3 high",
            "priority_id": 3,
            "group": "Users",
            "group_id": 1,
            "owner": "agent@example.com",
            "owner_id": 5,
            "customer": "nicole@example.com",
            "customer_id": 7,
            "created_at": "2024-02-01T10:00:00.000Z",
            "updated_at": "2024-02-02T11:30:00.000Z",
            "article_count": 3,
            "tags": ["hardware"]
        }"#
    }

    #[test]
    fn test_ticket_deserialize_expanded() {
        let ticket: Ticket = serde_json::from_str(expanded_ticket_json()).unwrap();
        assert_eq!(ticket.id, 42);
        assert_eq!(ticket.display_number(), "31042");
        assert_eq!(ticket.display_state(), "open");
        assert_eq!(ticket.display_priority(), "3 high");
        assert_eq!(ticket.display_owner(), "agent@example.com");
        assert_eq!(ticket.extra.get("article_count"), Some(&serde_json::json!(3)));
    }

    #[test]
    fn test_ticket_mixed_expansion_resolves_per_field() {
        let json = r#"{
            "id": 1,
            "state": "closed",
            "state_id": 4,
            "priority": "",
            "priority_id": 2,
            "group_id": 3
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.display_state(), "closed");
        assert_eq!(ticket.display_priority(), "2");
        assert_eq!(ticket.display_group(), "3");
        assert_eq!(ticket.display_owner(), "-");
        assert_eq!(ticket.display_customer(), "-");
    }

    #[test]
    fn test_ticket_requires_id() {
        let result = serde_json::from_str::<Ticket>(r#"{"title": "no id"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ticket_number_as_integer() {
        let ticket: Ticket = serde_json::from_str(r#"{"id": 1, "number": 31001}"#).unwrap();
        assert_eq!(ticket.display_number(), "31001");
    }

    #[test]
    fn test_ticket_unknown_fields_pass_through() {
        let ticket: Ticket = serde_json::from_str(expanded_ticket_json()).unwrap();
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["tags"], serde_json::json!(["hardware"]));
        assert_eq!(value["article_count"], 3);
        assert_eq!(value["state"], "open");
    }

    #[test]
    fn test_create_ticket_defaults_and_omissions() {
        let body = serde_json::to_value(CreateTicket::new("VPN down", 1)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "title": "VPN down",
                "group_id": 1,
                "priority_id": 2,
                "state_id": 1
            })
        );
    }

    #[test]
    fn test_create_ticket_with_customer_and_body() {
        let body = CreateTicket::new("VPN down", 1)
            .with_customer(9)
            .with_priority(3)
            .with_body("Cannot connect since 9am");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["customer_id"], 9);
        assert_eq!(json["priority_id"], 3);
        assert_eq!(json["article"]["subject"], "VPN down");
        assert_eq!(json["article"]["type"], "note");
        assert_eq!(json["article"]["internal"], false);
    }

    #[test]
    fn test_update_ticket_has_updates() {
        assert!(!UpdateTicket::default().has_updates());

        let update = UpdateTicket {
            owner_id: Some(5),
            ..Default::default()
        };
        assert!(update.has_updates());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"owner_id": 5})
        );
    }
}
