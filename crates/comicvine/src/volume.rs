use crate::client::ComicVineApi;
use crate::models::{IssueResponse, VolumeResponse};

// ComicVine identifiers are namespaced per resource type; the prefixes
// appear only in request paths, never in stored ids.
const VOLUME_PREFIX: &str = "4050";
const ISSUE_PREFIX: &str = "4000";

impl ComicVineApi {
    /// Get a volume by ID
    /// GET /volume/4050-{id}/
    pub async fn get_volume(&self, id: &str) -> crate::Result<VolumeResponse> {
        let key = self.key()?;
        let url = self.url(&format!(
            "/volume/{}-{}/?api_key={}&format=json",
            VOLUME_PREFIX,
            urlencoding::encode(id),
            key
        ));
        self.get_json(&url).await
    }

    /// Get an issue by ID
    /// GET /issue/4000-{id}/
    pub async fn get_issue(&self, issue_id: i64) -> crate::Result<IssueResponse> {
        let key = self.key()?;
        let url = self.url(&format!(
            "/issue/{}-{}/?api_key={}&format=json",
            ISSUE_PREFIX, issue_id, key
        ));
        self.get_json(&url).await
    }
}
