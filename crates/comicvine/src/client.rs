use std::sync::Arc;

use api::{classify_status, ApiError, ApiKey, ReqwestTransport, Transport};

pub(crate) const API_NAME: &str = "ComicVineAPI";
pub(crate) const BASE_URL: &str = "https://comicvine.gamespot.com/api";

pub struct ComicVineApi {
    transport: Arc<dyn Transport>,
    api_key: ApiKey,
    base_url: String,
}

impl ComicVineApi {
    pub fn new(transport: Arc<dyn Transport>, api_key: ApiKey) -> Self {
        Self {
            transport,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(
        transport: Arc<dyn Transport>,
        api_key: ApiKey,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Create a ComicVineApi with a reqwest Client.
    pub fn with_http_client(client: reqwest::Client, api_key: ApiKey) -> Self {
        Self::new(Arc::new(ReqwestTransport::new(client)), api_key)
    }

    /// Configured API key, checked before any network call.
    pub(crate) fn key(&self) -> crate::Result<String> {
        self.api_key
            .read()
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(ApiError::MissingApiKey { api: API_NAME })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> crate::Result<T> {
        let response = self.transport.http_get(url).await?;
        classify_status(API_NAME, response.status)?;
        response.json()
    }
}
