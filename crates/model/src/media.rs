//! Media kind tag and the shared model contract

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{BookModel, ComicModel, ModelError, MovieModel};

/// Tag identifying records produced by this library, always first in a
/// model's tag list.
pub const MEDIA_DB_TAG: &str = "mediaDB";

/// Media kind of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Comic,
    Movie,
    Book,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Comic => "comic",
            MediaType::Movie => "movie",
            MediaType::Book => "book",
        }
    }
}

/// Contract every concrete media model implements
pub trait MediaTypeModel {
    /// Stable tag set for downstream indexing: the library tag plus a
    /// kind-specific tag.
    fn tags(&self) -> Vec<String>;

    fn media_type(&self) -> MediaType;

    /// One-line identity, canonically `"<title> (<year>)"`.
    fn summary(&self) -> String;
}

/// Closed set of concrete media models
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MediaModel {
    Comic(ComicModel),
    Movie(MovieModel),
    Book(BookModel),
}

impl MediaModel {
    /// Build a model of the given kind from a raw object via the migration
    /// path.
    pub fn from_raw(media_type: MediaType, raw: &Value) -> Result<Self, ModelError> {
        Ok(match media_type {
            MediaType::Comic => MediaModel::Comic(ComicModel::from_raw(raw)?),
            MediaType::Movie => MediaModel::Movie(MovieModel::from_raw(raw)?),
            MediaType::Book => MediaModel::Book(BookModel::from_raw(raw)?),
        })
    }

    pub fn title(&self) -> &str {
        match self {
            MediaModel::Comic(m) => &m.title,
            MediaModel::Movie(m) => &m.title,
            MediaModel::Book(m) => &m.title,
        }
    }

    pub fn year(&self) -> &str {
        match self {
            MediaModel::Comic(m) => &m.year,
            MediaModel::Movie(m) => &m.year,
            MediaModel::Book(m) => &m.year,
        }
    }

    /// Provider-scoped identifier of the record.
    pub fn id(&self) -> &str {
        match self {
            MediaModel::Comic(m) => &m.id,
            MediaModel::Movie(m) => &m.id,
            MediaModel::Book(m) => &m.id,
        }
    }

    /// Name of the provider that produced this record.
    pub fn data_source(&self) -> &str {
        match self {
            MediaModel::Comic(m) => &m.data_source,
            MediaModel::Movie(m) => &m.data_source,
            MediaModel::Book(m) => &m.data_source,
        }
    }
}

impl MediaTypeModel for MediaModel {
    fn tags(&self) -> Vec<String> {
        match self {
            MediaModel::Comic(m) => m.tags(),
            MediaModel::Movie(m) => m.tags(),
            MediaModel::Book(m) => m.tags(),
        }
    }

    fn media_type(&self) -> MediaType {
        match self {
            MediaModel::Comic(m) => m.media_type(),
            MediaModel::Movie(m) => m.media_type(),
            MediaModel::Book(m) => m.media_type(),
        }
    }

    fn summary(&self) -> String {
        match self {
            MediaModel::Comic(m) => m.summary(),
            MediaModel::Movie(m) => m.summary(),
            MediaModel::Book(m) => m.summary(),
        }
    }
}
