//! Error taxonomy shared by all provider clients

use model::ModelError;

/// Errors surfaced by a provider client's search or detail operation
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Required credential not configured. Raised before any network call.
    #[error("API key for {api} is missing")]
    MissingApiKey { api: &'static str },

    /// HTTP 401: the provider rejected the configured credential.
    #[error("authentication for {api} failed, check the API key")]
    Authentication { api: &'static str },

    /// HTTP 429: the provider's request budget is exhausted.
    #[error("too many requests for {api}, the API quota is exceeded")]
    QuotaExceeded { api: &'static str },

    /// Any other non-200 status.
    #[error("received status code {status} from {api}")]
    Upstream { api: &'static str, status: u16 },

    /// Response body could not be interpreted as the expected structure.
    #[error("failed to parse response at `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Connection-level failure reported by the transport collaborator.
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Shape { path, source } => ApiError::Parse { path, source },
            ModelError::NotAnObject(kind) => ApiError::Parse {
                path: "$".to_string(),
                source: serde::de::Error::custom(format!("expected a JSON object, got {kind}")),
            },
        }
    }
}

/// Classify an HTTP status code the way every client does.
pub fn classify_status(api: &'static str, status: u16) -> Result<(), ApiError> {
    match status {
        200 => Ok(()),
        401 => Err(ApiError::Authentication { api }),
        429 => Err(ApiError::QuotaExceeded { api }),
        other => Err(ApiError::Upstream { api, status: other }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_the_taxonomy() {
        assert!(classify_status("TestAPI", 200).is_ok());
        assert!(matches!(
            classify_status("TestAPI", 401),
            Err(ApiError::Authentication { .. })
        ));
        assert!(matches!(
            classify_status("TestAPI", 429),
            Err(ApiError::QuotaExceeded { .. })
        ));
        assert!(matches!(
            classify_status("TestAPI", 500),
            Err(ApiError::Upstream { status: 500, .. })
        ));
        assert!(matches!(
            classify_status("TestAPI", 404),
            Err(ApiError::Upstream { status: 404, .. })
        ));
    }
}
