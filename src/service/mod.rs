//! Business logic between the controllers and the Discord API.
//!
//! - `auth` - OAuth login URL generation and callback handling
//! - `discord` - bot-credential API client, guild filtering, channel listing
//! - `message` - embed normalization and message dispatch

pub mod auth;
pub mod discord;
pub mod message;
