//! HTTP fetch gateway for the support-chat widget.
//!
//! Two read-only queries against a configured support backend: which
//! representative is available to take the chat, and the topic tree to
//! navigate. Every call is a single attempt; retrying, caching and backoff
//! are deliberately not this crate's business.

pub mod client;
pub mod error;
pub mod models;

pub use client::SupportClient;
pub use error::TransportError;
pub use models::Representative;
