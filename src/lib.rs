//! # zm
//!
//! zm is a command-line client for the Zammad helpdesk REST API. Each
//! subcommand maps to one or two HTTP calls and prints the JSON response as
//! readable text.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error type with token redaction
//! - [`models`] - Ticket, article, user and group records
//! - [`query`] - Search filter-query construction
//! - [`zammad_client`] - HTTP client for the Zammad API
//! - [`render`] - Terminal formatting
//! - [`cli`] - Command-line argument definitions
//! - [`commands`] - Dispatch from parsed arguments to client and renderer
//!
//! ## Configuration
//!
//! Two environment variables are required (a `.env` file in the working
//! directory is read as well):
//!
//! - `ZAMMAD_URL`: Base URL of the Zammad instance
//! - `ZAMMAD_TOKEN`: API access token
//!
//! Optional:
//! - `RUST_LOG`: Log filter (e.g., `zm=debug`); logs go to stderr
//!
//! ## Example
//!
//! ```ignore
//! use zm::config::Config;
//! use zm::query::TicketQuery;
//! use zm::zammad_client::ZammadClient;
//!
//! async fn example() -> Result<(), zm::error::ZmError> {
//!     let config = Config::from_env()?;
//!     let client = ZammadClient::new(&config)?;
//!
//!     let query = TicketQuery::new().with_state("open").build()?;
//!     for ticket in client.search_tickets(&query).await? {
//!         println!("#{} {}", ticket.display_number(), ticket.display_title());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod render;
pub mod zammad_client;
