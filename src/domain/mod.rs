//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Object and view types as returned by the API
//! - `wire.rs` — Request forms and response envelopes
//! - `client.rs` — Sub-client with one method per endpoint
//!
//! `modlog` has no sub-client; it is queried through [`crate::client::LemmyClient::site`].

pub mod admin;
pub mod comment;
pub mod community;
pub mod custom_emoji;
pub mod modlog;
pub mod person;
pub mod post;
pub mod private_message;
pub mod site;

#[cfg(test)]
pub(crate) mod fixtures;
