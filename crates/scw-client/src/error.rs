use thiserror::Error;

/// The only failure the widget observes from the gateway.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The backend answered, but with a non-2xx status.
    #[error("GET {url} returned {status} {status_text}")]
    Status {
        /// The URL that was queried.
        url: String,
        /// HTTP status code of the response.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
    },
    /// The request never produced a usable payload: connection failure,
    /// timeout, or a body that did not decode as the expected JSON.
    #[error("GET {url} failed")]
    Request {
        /// The URL that was queried.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    /// HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request { source, .. } => source.status().map(|code| code.as_u16()),
        }
    }

    /// Reason phrase of a status failure, `None` for request failures.
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Status { status_text, .. } => Some(status_text),
            Self::Request { .. } => None,
        }
    }
}
