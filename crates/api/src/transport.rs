//! HTTP transport collaborator
//!
//! Clients depend only on this shape: an HTTP GET returning a status code
//! and a body parsed on demand. Redirects, TLS, timeouts, and connection
//! reuse are the implementation's concern, not the core's. No retries
//! happen at this layer.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::ApiError;

pub(crate) const USER_AGENT: &str = "media-db/0.1";

/// Response from one HTTP GET
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Parse the body, reporting the JSON path on failure.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let deserializer = &mut serde_json::Deserializer::from_str(&self.body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| ApiError::Parse {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

/// Performs an HTTP GET on behalf of a provider client.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn http_get(&self, url: &str) -> Result<HttpResponse, ApiError>;
}

/// Production transport backed by a reqwest client
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn http_get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
