//! Open Library wire format

use serde::Deserialize;

/// Response from GET /search.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<Doc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Doc {
    /// Work key, e.g. `/works/OL45883W`.
    pub key: Option<String>,
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub first_publish_year: Option<i64>,
    pub cover_i: Option<i64>,
    pub number_of_pages_median: Option<i64>,
    pub isbn: Option<Vec<String>>,
}

/// Response from GET /works/{id}.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Work {
    pub title: Option<String>,
    pub description: Option<TextBlock>,
    pub covers: Option<Vec<i64>>,
    pub authors: Option<Vec<AuthorRole>>,
    pub first_publish_date: Option<String>,
}

/// Free text that Open Library serves either bare or wrapped in
/// `{"type": ..., "value": ...}` depending on the record's age.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextBlock {
    Plain(String),
    Typed { value: String },
}

impl TextBlock {
    pub fn as_str(&self) -> &str {
        match self {
            TextBlock::Plain(text) => text,
            TextBlock::Typed { value } => value,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorRole {
    pub author: Option<KeyRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyRef {
    /// Author key, e.g. `/authors/OL34184A`.
    pub key: Option<String>,
}

/// Response from GET /authors/{id}.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    pub name: Option<String>,
}
