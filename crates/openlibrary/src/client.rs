use std::sync::Arc;

use api::{classify_status, ReqwestTransport, Transport};

pub(crate) const API_NAME: &str = "OpenLibraryAPI";
pub(crate) const BASE_URL: &str = "https://openlibrary.org";
pub(crate) const COVERS_URL: &str = "https://covers.openlibrary.org";

pub struct OpenLibraryApi {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl OpenLibraryApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Create an OpenLibraryApi with a reqwest Client.
    pub fn with_http_client(client: reqwest::Client) -> Self {
        Self::new(Arc::new(ReqwestTransport::new(client)))
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
