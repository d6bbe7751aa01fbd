//! Command-line argument definitions.
//!
//! String inputs are trimmed by the `to_*` conversions; a value that is
//! empty after trimming is treated as not given.

use clap::{Args, Parser, Subcommand};

use crate::models::{CreateTicket, EntityId, UpdateTicket, DEFAULT_PRIORITY_ID, DEFAULT_STATE_ID};
use crate::query::TicketQuery;
use crate::render::DEFAULT_SEARCH_LIMIT;

/// Trims an optional string, mapping empty results to `None`.
fn trim_option(s: &Option<String>) -> Option<String> {
    s.as_ref()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// CLI tool for interacting with Zammad ticket systems.
#[derive(Parser, Debug)]
#[command(name = "zm", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage Zammad tickets
    #[command(subcommand)]
    Tickets(TicketsCommand),

    /// Manage Zammad users
    #[command(subcommand)]
    Users(UsersCommand),

    /// Manage Zammad groups
    #[command(subcommand)]
    Groups(GroupsCommand),
}

impl Command {
    /// Prefix used when reporting a failure of this command.
    pub fn failure_context(&self) -> &'static str {
        match self {
            Command::Tickets(TicketsCommand::List { .. }) => "Error fetching tickets",
            Command::Tickets(TicketsCommand::Get { .. }) => "Error fetching ticket",
            Command::Tickets(TicketsCommand::Search(_)) => "Error searching tickets",
            Command::Tickets(TicketsCommand::Create(_)) => "Error creating ticket",
            Command::Tickets(TicketsCommand::Update(_)) => "Error updating ticket",
            Command::Users(UsersCommand::List) => "Error fetching users",
            Command::Users(UsersCommand::Get { .. }) => "Error fetching user",
            Command::Users(UsersCommand::Me) => "Error fetching current user",
            Command::Groups(GroupsCommand::List) => "Error fetching groups",
            Command::Groups(GroupsCommand::Get { .. }) => "Error fetching group",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum TicketsCommand {
    /// List all tickets
    List {
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Tickets per page
        #[arg(short, long, default_value_t = 10)]
        limit: u32,

        /// Expand ticket details
        #[arg(short, long)]
        expand: bool,
    },

    /// Get a specific ticket by ID with all articles
    Get {
        /// Ticket ID
        id: EntityId,
    },

    /// Search for tickets with advanced filters
    Search(SearchArgs),

    /// Create a new ticket
    Create(CreateArgs),

    /// Update fields of an existing ticket
    Update(UpdateArgs),
}

/// Filters for `tickets search`.
///
/// Leading and trailing whitespace is dropped from every filter value; the
/// rest is substituted into the query unchanged. A value that is empty after
/// trimming counts as not given.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search query (searches in title and body)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Filter by state name
    #[arg(short, long)]
    pub state: Option<String>,

    /// Filter by priority name
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Filter by group name
    #[arg(short, long)]
    pub group: Option<String>,

    /// Filter by customer email
    #[arg(short, long)]
    pub customer: Option<String>,

    /// Filter by owner email
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Limit number of results
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,

    /// Show detailed results
    #[arg(short, long)]
    pub detailed: bool,
}

impl SearchArgs {
    /// Collects the given filters into a query, trimming each value.
    pub fn to_query(&self) -> TicketQuery {
        TicketQuery {
            text: trim_option(&self.query),
            state: trim_option(&self.state),
            priority: trim_option(&self.priority),
            group: trim_option(&self.group),
            customer: trim_option(&self.customer),
            owner: trim_option(&self.owner),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Ticket title
    #[arg(short, long)]
    pub title: String,

    /// Group ID
    #[arg(short, long)]
    pub group: EntityId,

    /// Customer ID
    #[arg(short, long)]
    pub customer: Option<EntityId>,

    /// Priority ID
    #[arg(short, long, default_value_t = DEFAULT_PRIORITY_ID)]
    pub priority: EntityId,

    /// State ID
    #[arg(short, long, default_value_t = DEFAULT_STATE_ID)]
    pub state: EntityId,

    /// Text of the first article
    #[arg(short, long)]
    pub body: Option<String>,
}

impl CreateArgs {
    pub fn to_request(&self) -> CreateTicket {
        let mut ticket = CreateTicket::new(self.title.trim(), self.group)
            .with_priority(self.priority)
            .with_state(self.state);
        if let Some(customer) = self.customer {
            ticket = ticket.with_customer(customer);
        }
        if let Some(body) = trim_option(&self.body) {
            ticket = ticket.with_body(body);
        }
        ticket
    }
}

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Ticket ID
    pub id: EntityId,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New state ID
    #[arg(short, long)]
    pub state: Option<EntityId>,

    /// New priority ID
    #[arg(short, long)]
    pub priority: Option<EntityId>,

    /// New group ID
    #[arg(short, long)]
    pub group: Option<EntityId>,

    /// New owner ID
    #[arg(short, long)]
    pub owner: Option<EntityId>,
}

impl UpdateArgs {
    pub fn to_request(&self) -> UpdateTicket {
        UpdateTicket {
            title: trim_option(&self.title),
            state_id: self.state,
            priority_id: self.priority,
            group_id: self.group,
            owner_id: self.owner,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List all users
    List,

    /// Get a specific user by ID
    Get {
        /// User ID
        id: EntityId,
    },

    /// Get current user information
    Me,
}

#[derive(Subcommand, Debug)]
pub enum GroupsCommand {
    /// List all groups
    List,

    /// Get a specific group by ID
    Get {
        /// Group ID
        id: EntityId,
    },
}
