//! Data models for the Zammad API.
//!
//! Each entity is a fixed set of typed, optional fields plus an `extra` map
//! holding any field this client does not know about.

mod article;
mod common;
mod group;
mod ticket;
mod user;

pub use article::*;
pub use common::*;
pub use group::*;
pub use ticket::*;
pub use user::*;
