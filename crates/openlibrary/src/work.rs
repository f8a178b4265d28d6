use crate::client::OpenLibraryApi;
use crate::models::{Author, Work};

impl OpenLibraryApi {
    /// Get a work by ID
    /// GET /works/{id}.json
    pub async fn get_work(&self, id: &str) -> crate::Result<Work> {
        let url = self.url(&format!("/works/{}.json", urlencoding::encode(id)));
        self.get_json(&url).await
    }

    /// Get an author by ID
    /// GET /authors/{id}.json
    pub async fn get_author(&self, id: &str) -> crate::Result<Author> {
        let url = self.url(&format!("/authors/{}.json", urlencoding::encode(id)));
        self.get_json(&url).await
    }
}
