use std::time::Duration;

use scw_nav::Topic;
use serde::de::DeserializeOwned;

use crate::error::TransportError;
use crate::models::Representative;

/// HTTP gateway to the support backend.
///
/// Holds a pooled [`reqwest::Client`], so clone-free reuse across calls is
/// cheap. All requests share the timeout given at construction.
#[derive(Debug, Clone)]
pub struct SupportClient {
    http: reqwest::Client,
    base_url: String,
}

impl SupportClient {
    /// Builds a client for the backend at `base_url`.
    ///
    /// A trailing slash on the base URL is accepted and normalized away.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Fetches the currently available support representative.
    pub async fn representative(&self) -> Result<Representative, TransportError> {
        self.get_json("customer/available").await
    }

    /// Fetches the root topic tree.
    pub async fn topics(&self) -> Result<Vec<Topic>, TransportError> {
        self.get_json("topics").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "requesting support backend");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_owned(),
            });
        }

        response
            .json()
            .await
            .map_err(|source| TransportError::Request { url, source })
    }
}
