use crate::client::OpenLibraryApi;
use crate::models::SearchResponse;

impl OpenLibraryApi {
    /// Search works by free text
    /// GET /search.json?q={title}&limit=10
    pub async fn search_works(&self, title: &str) -> crate::Result<SearchResponse> {
        let encoded = urlencoding::encode(title);
        let url = self.url(&format!("/search.json?q={}&limit=10", encoded));
        self.get_json(&url).await
    }
}
