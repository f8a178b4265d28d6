//! OMDb wire format
//!
//! OMDb capitalizes its field names and uses the string `"N/A"` for
//! absent values; mapping strips the sentinel.

use serde::Deserialize;

/// Response from GET /?s={title}&type=movie
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchItem>,
    #[serde(rename = "Response")]
    pub response: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

/// Response from GET /?i={id}&plot=full
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Response")]
    pub response: Option<String>,
}

impl MovieDetail {
    /// OMDb reports lookup failures in-band with HTTP 200.
    pub fn is_failure(&self) -> bool {
        self.response.as_deref() == Some("False")
    }
}
