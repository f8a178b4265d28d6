//! MediaApi implementation: maps ComicVine payloads into comic models

use api::{ApiError, MediaApi};
use async_trait::async_trait;
use model::{ComicModel, MediaModel, MediaType};
use serde_json::json;

use crate::client::{ComicVineApi, API_NAME, BASE_URL};
use crate::models::{Issue, Volume};

#[async_trait]
impl MediaApi for ComicVineApi {
    fn api_name(&self) -> &'static str {
        API_NAME
    }

    fn api_description(&self) -> &'static str {
        "A free API for comics."
    }

    fn api_url(&self) -> &'static str {
        BASE_URL
    }

    fn types(&self) -> &'static [MediaType] {
        &[MediaType::Comic]
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<MediaModel>, ApiError> {
        tracing::debug!("api {} queried by title: {}", API_NAME, title);

        let response = self.search_volumes(title).await?;
        response
            .results
            .iter()
            .map(search_model)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn get_by_id(&self, id: &str) -> Result<MediaModel, ApiError> {
        tracing::debug!("api {} queried by id: {}", API_NAME, id);

        let response = self.get_volume(id).await?;
        let volume = response.results;

        // Volume-level metadata lacks the issue description and the best
        // cover; chain a fetch of the first issue when the volume names one.
        let issue = match volume.first_issue.as_ref().and_then(|first| first.id) {
            Some(issue_id) => Some(self.get_issue(issue_id).await?.results),
            None => None,
        };

        detail_model(&volume, issue.as_ref(), id)
    }
}

fn search_model(volume: &Volume) -> Result<MediaModel, ApiError> {
    let raw = json!({
        "title": volume.name.clone().unwrap_or_default(),
        "englishTitle": volume.name.clone().unwrap_or_default(),
        "year": volume.start_year.clone().unwrap_or_default(),
        "dataSource": API_NAME,
        "id": volume.id.map(|id| id.to_string()).unwrap_or_default(),
        "image": cover_of(volume.image.as_ref()),
    });
    Ok(MediaModel::Comic(ComicModel::from_raw(&raw)?))
}

fn detail_model(
    volume: &Volume,
    issue: Option<&Issue>,
    requested_id: &str,
) -> Result<MediaModel, ApiError> {
    // Issue-level description and cover win over the volume's when present.
    let description = issue
        .and_then(|i| i.description.clone())
        .or_else(|| volume.description.clone())
        .unwrap_or_default();
    let image = issue
        .and_then(|i| i.image.as_ref())
        .and_then(|i| i.super_url.clone())
        .unwrap_or_else(|| cover_of(volume.image.as_ref()));

    let raw = json!({
        "title": volume.name.clone().unwrap_or_default(),
        "englishTitle": volume.name.clone().unwrap_or_default(),
        "year": volume.start_year.clone().unwrap_or_default(),
        "dataSource": API_NAME,
        "url": volume.site_detail_url.clone().unwrap_or_default(),
        "id": volume
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| requested_id.to_string()),
        "publishers": volume
            .publisher
            .as_ref()
            .and_then(|p| p.name.clone())
            .map(|name| vec![name])
            .unwrap_or_default(),
        "issues": volume
            .issues
            .iter()
            .flatten()
            .filter_map(|i| i.issue_number.clone())
            .collect::<Vec<_>>(),
        "description": description,
        "image": image,
        "released": true,
        "releaseDate": volume
            .original_release_date
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
    });
    Ok(MediaModel::Comic(ComicModel::from_raw(&raw)?))
}

fn cover_of(image: Option<&crate::models::Image>) -> String {
    image
        .and_then(|i| i.super_url.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use api::{api_key, unset_api_key, HttpResponse, Transport};
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    /// Transport scripted by URL fragment; unmatched requests fail.
    struct FakeTransport {
        routes: Vec<(&'static str, u16, String)>,
    }

    impl FakeTransport {
        fn new(routes: Vec<(&'static str, u16, serde_json::Value)>) -> Arc<Self> {
            Arc::new(Self {
                routes: routes
                    .into_iter()
                    .map(|(frag, status, body)| (frag, status, body.to_string()))
                    .collect(),
            })
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn http_get(&self, url: &str) -> Result<HttpResponse, ApiError> {
            for (fragment, status, body) in &self.routes {
                if url.contains(fragment) {
                    return Ok(HttpResponse {
                        status: *status,
                        body: body.clone(),
                    });
                }
            }
            Err(ApiError::Transport(format!("no scripted response for {url}")))
        }
    }

    fn client_with(routes: Vec<(&'static str, u16, serde_json::Value)>) -> ComicVineApi {
        ComicVineApi::new(FakeTransport::new(routes), api_key("secret"))
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = ComicVineApi::new(FakeTransport::new(vec![]), unset_api_key());
        let err = client.search_by_title("Saga").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingApiKey { .. }));
    }

    #[tokio::test]
    async fn status_401_is_an_authentication_error() {
        let client = client_with(vec![("/search", 401, json!({}))]);
        let err = client.search_by_title("Saga").await.unwrap_err();
        assert!(matches!(err, ApiError::Authentication { .. }));
    }

    #[tokio::test]
    async fn status_429_is_a_quota_error() {
        let client = client_with(vec![("/search", 429, json!({}))]);
        let err = client.search_by_title("Saga").await.unwrap_err();
        assert!(matches!(err, ApiError::QuotaExceeded { .. }));
    }

    #[tokio::test]
    async fn other_statuses_carry_the_code() {
        let client = client_with(vec![("/search", 500, json!({}))]);
        let err = client.search_by_title("Saga").await.unwrap_err();
        assert!(matches!(err, ApiError::Upstream { status: 500, .. }));
    }

    #[tokio::test]
    async fn search_preserves_provider_order() {
        let client = client_with(vec![(
            "/search",
            200,
            json!({"results": [
                {"id": 1, "name": "A", "start_year": "2001"},
                {"id": 2, "name": "B", "start_year": "2002"},
                {"id": 3, "name": "C", "start_year": "2003"},
            ]}),
        )]);
        let models = client.search_by_title("letters").await.unwrap();
        let titles: Vec<&str> = models.iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(models[0].data_source(), "ComicVineAPI");
    }

    #[tokio::test]
    async fn missing_optional_fields_default_instead_of_failing() {
        let client = client_with(vec![(
            "/search",
            200,
            json!({"results": [{"id": 9, "name": "Saga"}]}),
        )]);
        let models = client.search_by_title("Saga").await.unwrap();
        match &models[0] {
            MediaModel::Comic(comic) => {
                assert_eq!(comic.image, "");
                assert_eq!(comic.year, "");
            }
            other => panic!("expected comic, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn detail_merges_the_chained_issue_response() {
        let client = client_with(vec![
            (
                "/volume/4050-42",
                200,
                json!({"results": {
                    "id": 42,
                    "name": "Saga",
                    "start_year": "2012",
                    "description": "volume-level",
                    "image": {"super_url": "http://img/volume.jpg"},
                    "first_issue": {"id": 7},
                    "publisher": {"name": "Image Comics"},
                    "issues": [{"issue_number": "1"}, {"issue_number": "2"}],
                    "original_release_date": "2012-03-14",
                }}),
            ),
            (
                "/issue/4000-7",
                200,
                json!({"results": {
                    "id": 7,
                    "description": "D",
                    "image": {"super_url": "http://img/issue.jpg"},
                }}),
            ),
        ]);

        let model = client.get_by_id("42").await.unwrap();
        match model {
            MediaModel::Comic(comic) => {
                assert_eq!(comic.description, "D");
                assert_eq!(comic.image, "http://img/issue.jpg");
                assert_eq!(comic.id, "42");
                assert_eq!(comic.publishers, vec!["Image Comics"]);
                assert_eq!(comic.issues, vec!["1", "2"]);
                assert_eq!(comic.release_date, "2012-03-14");
                assert!(comic.released);
            }
            other => panic!("expected comic, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn chained_failure_fails_the_whole_detail_call() {
        let client = client_with(vec![
            (
                "/volume/4050-42",
                200,
                json!({"results": {"id": 42, "name": "Saga", "first_issue": {"id": 7}}}),
            ),
            ("/issue/4000-7", 500, json!({})),
        ]);
        let err = client.get_by_id("42").await.unwrap_err();
        assert!(matches!(err, ApiError::Upstream { status: 500, .. }));
    }

    #[tokio::test]
    async fn detail_without_first_issue_skips_the_chain() {
        let client = client_with(vec![(
            "/volume/4050-42",
            200,
            json!({"results": {"id": 42, "name": "Saga", "description": "volume-level"}}),
        )]);
        let model = client.get_by_id("42").await.unwrap();
        match model {
            MediaModel::Comic(comic) => {
                assert_eq!(comic.description, "volume-level");
                assert_eq!(comic.release_date, "unknown");
            }
            other => panic!("expected comic, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let client = ComicVineApi::new(
            Arc::new(FakeTransport {
                routes: vec![("/search", 200, "not json".to_string())],
            }),
            api_key("secret"),
        );
        let err = client.search_by_title("Saga").await.unwrap_err();
        assert!(matches!(err, ApiError::Parse { .. }));
    }
}
