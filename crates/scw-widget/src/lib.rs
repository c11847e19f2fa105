//! Orchestration layer for the support chat widget.
//!
//! Ties the HTTP gateway from `scw-client` to the navigation session from
//! `scw-nav`, and carries the ambient concerns a front-end needs around
//! them: configuration from the environment, one error type for callers,
//! and tracing setup.

pub mod config;
pub mod error;
pub mod tracing;
pub mod widget;

pub use config::{Environment, WidgetConfig};
pub use error::WidgetError;
pub use widget::ChatWidget;
