use crate::client::ComicVineApi;
use crate::models::SearchResponse;

impl ComicVineApi {
    /// Search comic volumes by title
    /// GET /search?query={title}&limit=10&resources=volume
    pub async fn search_volumes(&self, title: &str) -> crate::Result<SearchResponse> {
        let key = self.key()?;
        let encoded = urlencoding::encode(title);
        let url = self.url(&format!(
            "/search?api_key={}&query={}&limit=10&resources=volume&format=json",
            key, encoded
        ));
        self.get_json(&url).await
    }
}
