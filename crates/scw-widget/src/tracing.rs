//! Tracing setup for the widget
//!
//! Development gets pretty, human-readable output at DEBUG; production gets
//! JSON at INFO for log aggregation. Either way `RUST_LOG` overrides the
//! built-in default (e.g. `RUST_LOG=debug,reqwest=trace`).

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Initialize the global tracing subscriber for the given environment.
///
/// Call once at startup, before the first fetch.
pub fn init_tracing(env: &Environment) {
    if env.is_development() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(filter_or("debug,hyper_util=info,reqwest=info")),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(filter_or("info,hyper_util=warn,reqwest=warn")),
            )
            .init();
    }

    tracing::info!(environment = ?env, "Tracing initialized");
}

/// `RUST_LOG` wins over the built-in default.
fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
