use crate::client::OmdbApi;
use crate::models::{MovieDetail, SearchResponse};

impl OmdbApi {
    /// Search movies by title
    /// GET /?s={title}&type=movie
    pub async fn search_movies(&self, title: &str) -> crate::Result<SearchResponse> {
        let key = self.key()?;
        let encoded = urlencoding::encode(title);
        let url = self.url(&format!("/?apikey={}&s={}&type=movie", key, encoded));
        self.get_json(&url).await
    }

    /// Get full movie detail by IMDb ID
    /// GET /?i={id}&plot=full
    pub async fn get_movie(&self, id: &str) -> crate::Result<MovieDetail> {
        let key = self.key()?;
        let url = self.url(&format!(
            "/?apikey={}&i={}&plot=full",
            key,
            urlencoding::encode(id)
        ));
        self.get_json(&url).await
    }
}
