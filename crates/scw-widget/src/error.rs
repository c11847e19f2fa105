use scw_client::TransportError;
use scw_nav::NavError;
use thiserror::Error;

/// Everything that can go wrong while driving the widget.
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("navigation error: {0}")]
    Nav(#[from] NavError),
}
