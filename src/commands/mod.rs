//! Command dispatch.
//!
//! Each command performs its requests through a [`ZammadClient`] and
//! returns the text to print. Nothing is printed here, so a failed command
//! never produces partial output.

mod groups;
mod tickets;
mod users;

use crate::cli::Command;
use crate::error::ZmError;
use crate::zammad_client::ZammadClient;

/// Runs a parsed command and returns its rendered output.
pub async fn run(command: &Command, client: &ZammadClient) -> Result<String, ZmError> {
    match command {
        Command::Tickets(cmd) => tickets::run(cmd, client).await,
        Command::Users(cmd) => users::run(cmd, client).await,
        Command::Groups(cmd) => groups::run(cmd, client).await,
    }
}
