//! Search query construction.
//!
//! Translates independently optional search criteria into one string in
//! Zammad's search syntax, e.g.
//! `title:*printer* OR body:*printer* AND state.name:open`.
//!
//! Values are substituted verbatim. Characters that carry meaning in the
//! search syntax (quotes, colons, `*`) are not escaped.

use crate::error::ZmError;

/// Joins clauses; the search backend treats it as a conjunction.
pub const CLAUSE_SEPARATOR: &str = " AND ";

/// Message of the validation error raised for an empty search.
pub const NO_CRITERIA_MESSAGE: &str = "at least one search criterion required";

/// One filter clause of a ticket search.
///
/// Variant order is the order clauses appear in the built query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchClause {
    /// Wildcard substring match against title or body.
    Text(String),
    /// Equality on the state's display name.
    State(String),
    /// Equality on the priority's display name.
    Priority(String),
    /// Equality on the group's display name.
    Group(String),
    /// Equality on the customer's email.
    Customer(String),
    /// Equality on the owner's email.
    Owner(String),
}

impl SearchClause {
    /// Renders the clause in the search syntax.
    pub fn render(&self) -> String {
        match self {
            SearchClause::Text(t) => format!("title:*{t}* OR body:*{t}*"),
            SearchClause::State(v) => format!("state.name:{v}"),
            SearchClause::Priority(v) => format!("priority.name:{v}"),
            SearchClause::Group(v) => format!("group.name:{v}"),
            SearchClause::Customer(v) => format!("customer.email:{v}"),
            SearchClause::Owner(v) => format!("owner.email:{v}"),
        }
    }
}

/// Criteria for a ticket search. Every field is optional; empty strings
/// count as absent.
///
/// # Example
///
/// ```
/// use zm::query::TicketQuery;
///
/// let query = TicketQuery::new()
///     .with_state("open")
///     .with_priority("high")
///     .build()
///     .unwrap();
/// assert_eq!(query, "state.name:open AND priority.name:high");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketQuery {
    /// Free-text term matched against title and body.
    pub text: Option<String>,
    /// State name.
    pub state: Option<String>,
    /// Priority name.
    pub priority: Option<String>,
    /// Group name.
    pub group: Option<String>,
    /// Customer email.
    pub customer: Option<String>,
    /// Owner email.
    pub owner: Option<String>,
}

impl TicketQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Returns the clauses for every present criterion, in query order.
    pub fn clauses(&self) -> Vec<SearchClause> {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(String::from);

        [
            present(&self.text).map(SearchClause::Text),
            present(&self.state).map(SearchClause::State),
            present(&self.priority).map(SearchClause::Priority),
            present(&self.group).map(SearchClause::Group),
            present(&self.customer).map(SearchClause::Customer),
            present(&self.owner).map(SearchClause::Owner),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Returns true if no criterion is present.
    pub fn is_empty(&self) -> bool {
        self.clauses().is_empty()
    }

    /// Builds the filter-query string.
    ///
    /// # Errors
    ///
    /// Returns `ZmError::Validation` when no criterion is present; an
    /// unfiltered search is never issued.
    pub fn build(&self) -> Result<String, ZmError> {
        let clauses = self.clauses();
        if clauses.is_empty() {
            return Err(ZmError::validation(NO_CRITERIA_MESSAGE));
        }

        Ok(clauses
            .iter()
            .map(SearchClause::render)
            .collect::<Vec<_>>()
            .join(CLAUSE_SEPARATOR))
    }
}
