//! MediaApi implementation: maps Open Library payloads into book models

use api::{ApiError, MediaApi};
use async_trait::async_trait;
use model::{BookModel, MediaModel, MediaType};
use serde_json::json;

use crate::client::{OpenLibraryApi, API_NAME, BASE_URL, COVERS_URL};
use crate::models::{Doc, Work};

#[async_trait]
impl MediaApi for OpenLibraryApi {
    fn api_name(&self) -> &'static str {
        API_NAME
    }

    fn api_description(&self) -> &'static str {
        "A free and open book catalog."
    }

    fn api_url(&self) -> &'static str {
        BASE_URL
    }

    fn types(&self) -> &'static [MediaType] {
        &[MediaType::Book]
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<MediaModel>, ApiError> {
        tracing::debug!("api {} queried by title: {}", API_NAME, title);

        let response = self.search_works(title).await?;
        response
            .docs
            .iter()
            .map(search_model)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn get_by_id(&self, id: &str) -> Result<MediaModel, ApiError> {
        tracing::debug!("api {} queried by id: {}", API_NAME, id);

        let work = self.get_work(id).await?;

        // Author names live on their own endpoint; resolve the first
        // listed author with a chained request.
        let author = match first_author_key(&work) {
            Some(author_id) => self.get_author(&author_id).await?.name,
            None => None,
        };

        detail_model(&work, author, id)
    }
}

fn first_author_key(work: &Work) -> Option<String> {
    work.authors
        .as_ref()?
        .first()?
        .author
        .as_ref()?
        .key
        .as_ref()
        .map(|key| key.trim_start_matches("/authors/").to_string())
}

fn search_model(doc: &Doc) -> Result<MediaModel, ApiError> {
    let id = doc
        .key
        .as_deref()
        .map(|key| key.trim_start_matches("/works/").to_string())
        .unwrap_or_default();
    let raw = json!({
        "title": doc.title.clone().unwrap_or_default(),
        "englishTitle": doc.title.clone().unwrap_or_default(),
        "year": doc
            .first_publish_year
            .map(|year| year.to_string())
            .unwrap_or_default(),
        "dataSource": API_NAME,
        "url": doc
            .key
            .as_deref()
            .map(|key| format!("{BASE_URL}{key}"))
            .unwrap_or_default(),
        "id": id,
        "author": doc.author_name.clone().unwrap_or_default(),
        "pages": doc.number_of_pages_median.unwrap_or_default(),
        "image": doc.cover_i.map(cover_url).unwrap_or_default(),
        "isbn": doc
            .isbn
            .as_ref()
            .and_then(|numbers| numbers.first())
            .cloned()
            .unwrap_or_default(),
    });
    Ok(MediaModel::Book(BookModel::from_raw(&raw)?))
}

fn detail_model(work: &Work, author: Option<String>, id: &str) -> Result<MediaModel, ApiError> {
    let raw = json!({
        "title": work.title.clone().unwrap_or_default(),
        "englishTitle": work.title.clone().unwrap_or_default(),
        "year": work
            .first_publish_date
            .as_deref()
            .and_then(year_of)
            .unwrap_or_default(),
        "dataSource": API_NAME,
        "url": format!("{BASE_URL}/works/{id}"),
        "id": id,
        "author": author.map(|name| vec![name]).unwrap_or_default(),
        "plot": work
            .description
            .as_ref()
            .map(|text| text.as_str().to_string())
            .unwrap_or_default(),
        "image": work
            .covers
            .as_ref()
            .and_then(|covers| covers.first())
            .map(|cover| cover_url(*cover))
            .unwrap_or_default(),
        "released": true,
        "releaseDate": work
            .first_publish_date
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
    });
    Ok(MediaModel::Book(BookModel::from_raw(&raw)?))
}

fn cover_url(cover_id: i64) -> String {
    format!("{COVERS_URL}/b/id/{cover_id}-L.jpg")
}

fn year_of(date: &str) -> Option<String> {
    let digits: String = date.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
    (digits.len() == 4).then_some(digits)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use api::{HttpResponse, Transport};
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

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

    #[tokio::test]
    async fn search_maps_docs_in_order() {
        let client = OpenLibraryApi::new(FakeTransport::new(vec![(
            "/search.json",
            200,
            json!({"docs": [
                {"key": "/works/OL1W", "title": "Dune", "author_name": ["Frank Herbert"],
                 "first_publish_year": 1965, "cover_i": 11},
                {"key": "/works/OL2W", "title": "Dune Messiah"},
            ]}),
        )]));

        let models = client.search_by_title("dune").await.unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].title(), "Dune");
        assert_eq!(models[0].id(), "OL1W");
        assert_eq!(models[1].title(), "Dune Messiah");
        match &models[0] {
            MediaModel::Book(book) => {
                assert_eq!(book.author, vec!["Frank Herbert"]);
                assert_eq!(book.year, "1965");
                assert_eq!(book.image, "https://covers.openlibrary.org/b/id/11-L.jpg");
            }
            other => panic!("expected book, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn detail_chains_the_author_lookup() {
        let client = OpenLibraryApi::new(FakeTransport::new(vec![
            (
                "/works/OL1W.json",
                200,
                json!({
                    "title": "Dune",
                    "description": {"type": "/type/text", "value": "Spice."},
                    "covers": [11],
                    "authors": [{"author": {"key": "/authors/OL10A"}}],
                    "first_publish_date": "August 1965",
                }),
            ),
            ("/authors/OL10A.json", 200, json!({"name": "Frank Herbert"})),
        ]));

        let model = client.get_by_id("OL1W").await.unwrap();
        match model {
            MediaModel::Book(book) => {
                assert_eq!(book.author, vec!["Frank Herbert"]);
                assert_eq!(book.plot, "Spice.");
                assert_eq!(book.year, "1965");
                assert_eq!(book.release_date, "August 1965");
            }
            other => panic!("expected book, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_author_lookup_fails_the_detail_call() {
        let client = OpenLibraryApi::new(FakeTransport::new(vec![
            (
                "/works/OL1W.json",
                200,
                json!({"title": "Dune", "authors": [{"author": {"key": "/authors/OL10A"}}]}),
            ),
            ("/authors/OL10A.json", 500, json!({})),
        ]));

        let err = client.get_by_id("OL1W").await.unwrap_err();
        assert!(matches!(err, ApiError::Upstream { status: 500, .. }));
    }

    #[tokio::test]
    async fn plain_string_description_is_accepted() {
        let client = OpenLibraryApi::new(FakeTransport::new(vec![(
            "/works/OL1W.json",
            200,
            json!({"title": "Dune", "description": "Spice."}),
        )]));

        let model = client.get_by_id("OL1W").await.unwrap();
        match model {
            MediaModel::Book(book) => {
                assert_eq!(book.plot, "Spice.");
                assert!(book.author.is_empty());
                assert_eq!(book.release_date, "unknown");
            }
            other => panic!("expected book, got {other:?}"),
        }
    }
}
