//! MediaApi implementation: maps OMDb payloads into movie models

use api::{ApiError, MediaApi};
use async_trait::async_trait;
use model::{MediaModel, MediaType, MovieModel};
use serde_json::json;

use crate::client::{OmdbApi, API_NAME, BASE_URL};
use crate::models::{MovieDetail, SearchItem};

#[async_trait]
impl MediaApi for OmdbApi {
    fn api_name(&self) -> &'static str {
        API_NAME
    }

    fn api_description(&self) -> &'static str {
        "A free API for movies."
    }

    fn api_url(&self) -> &'static str {
        BASE_URL
    }

    fn types(&self) -> &'static [MediaType] {
        &[MediaType::Movie]
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<MediaModel>, ApiError> {
        tracing::debug!("api {} queried by title: {}", API_NAME, title);

        // An in-band "False" response simply has no Search field and maps
        // to an empty result set.
        let response = self.search_movies(title).await?;
        response
            .search
            .iter()
            .map(search_model)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn get_by_id(&self, id: &str) -> Result<MediaModel, ApiError> {
        tracing::debug!("api {} queried by id: {}", API_NAME, id);

        let detail = self.get_movie(id).await?;
        if detail.is_failure() {
            return Err(ApiError::Parse {
                path: "Response".to_string(),
                source: serde::de::Error::custom("provider reported an in-band failure"),
            });
        }
        detail_model(&detail, id)
    }
}

fn search_model(item: &SearchItem) -> Result<MediaModel, ApiError> {
    let raw = json!({
        "title": item.title.clone().unwrap_or_default(),
        "englishTitle": item.title.clone().unwrap_or_default(),
        "year": clean(item.year.as_deref()),
        "dataSource": API_NAME,
        "id": item.imdb_id.clone().unwrap_or_default(),
        "image": clean(item.poster.as_deref()),
    });
    Ok(MediaModel::Movie(MovieModel::from_raw(&raw)?))
}

fn detail_model(detail: &MovieDetail, requested_id: &str) -> Result<MediaModel, ApiError> {
    let raw = json!({
        "title": clean(detail.title.as_deref()),
        "englishTitle": clean(detail.title.as_deref()),
        "year": clean(detail.year.as_deref()),
        "dataSource": API_NAME,
        "url": detail
            .imdb_id
            .as_deref()
            .map(|id| format!("https://www.imdb.com/title/{id}/"))
            .unwrap_or_default(),
        "id": detail
            .imdb_id
            .clone()
            .unwrap_or_else(|| requested_id.to_string()),
        "plot": clean(detail.plot.as_deref()),
        "genres": split_list(detail.genre.as_deref()),
        "director": split_list(detail.director.as_deref()),
        "actors": split_list(detail.actors.as_deref()),
        "image": clean(detail.poster.as_deref()),
        "onlineRating": detail
            .imdb_rating
            .as_deref()
            .and_then(|rating| rating.parse::<f64>().ok())
            .unwrap_or(0.0),
        "released": true,
        "releaseDate": detail
            .released
            .as_deref()
            .filter(|date| *date != "N/A")
            .unwrap_or("unknown"),
    });
    Ok(MediaModel::Movie(MovieModel::from_raw(&raw)?))
}

/// Strip OMDb's `"N/A"` sentinel.
fn clean(value: Option<&str>) -> String {
    match value {
        Some("N/A") | None => String::new(),
        Some(text) => text.to_string(),
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    let text = clean(value);
    if text.is_empty() {
        return Vec::new();
    }
    text.split(", ").map(str::to_string).collect()
}
