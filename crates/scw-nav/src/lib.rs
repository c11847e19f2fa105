//! Topic-navigation core for the support-chat widget.
//!
//! This crate holds the navigation session state machine and the topic tree
//! it walks. Everything here is pure and synchronous: topic trees are handed
//! in after a fetch, and the one operation that needs a re-fetch (`go_back`
//! at the top of the stack) reports that back to the caller instead of doing
//! IO itself.

pub mod session;
pub mod topic;

pub use session::{BackOutcome, NavError, NavigationSession};
pub use topic::Topic;
