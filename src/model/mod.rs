//! Domain models and API transfer types.
//!
//! - `api` - request/response DTOs for the dashboard's own HTTP surface
//! - `discord` - Discord-side types (users, guild memberships, channels)
//! - `message` - embed drafts and their normalized wire forms

pub mod api;
pub mod discord;
pub mod message;
