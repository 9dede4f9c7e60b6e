//! HTTP request handlers.
//!
//! Handlers run the auth guard first, call into the service layer second,
//! and convert the result into a DTO. No handler talks to Discord directly.

pub mod auth;
pub mod discord;
pub mod message;
