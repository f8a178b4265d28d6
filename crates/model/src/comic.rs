//! Comic media model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::stringy;
use crate::media::{MediaType, MediaTypeModel, MEDIA_DB_TAG};
use crate::migrate::hydrate;
use crate::Result;

/// A comic volume record
///
/// Serialized in the persisted camelCase format, so old records reload
/// through the same migration path as fresh API payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComicModel {
    #[serde(rename = "type")]
    pub kind: MediaType,
    pub title: String,
    pub english_title: String,
    #[serde(deserialize_with = "stringy")]
    pub year: String,
    pub data_source: String,
    pub url: String,
    #[serde(deserialize_with = "stringy")]
    pub id: String,

    pub publishers: Vec<String>,
    pub issues: Vec<String>,
    pub description: String,
    pub image: String,

    pub released: bool,
    /// `YYYY-MM-DD` or the literal sentinel `"unknown"`.
    pub release_date: String,

    pub user_data: ComicUserData,
}

/// User-edited fields, preserved verbatim across re-fetches
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComicUserData {
    pub read: bool,
    pub personal_rating: f64,
}

impl Default for ComicModel {
    fn default() -> Self {
        Self {
            kind: MediaType::Comic,
            title: String::new(),
            english_title: String::new(),
            year: String::new(),
            data_source: String::new(),
            url: String::new(),
            id: String::new(),
            publishers: Vec::new(),
            issues: Vec::new(),
            description: String::new(),
            image: String::new(),
            released: false,
            release_date: String::new(),
            user_data: ComicUserData::default(),
        }
    }
}

impl ComicModel {
    /// Build a comic model from a raw object (API payload or persisted
    /// record). The `type` tag always ends up [`MediaType::Comic`],
    /// whatever the raw object claimed.
    pub fn from_raw(raw: &Value) -> Result<Self> {
        hydrate(raw, MediaType::Comic)
    }
}

impl MediaTypeModel for ComicModel {
    fn tags(&self) -> Vec<String> {
        vec![MEDIA_DB_TAG.to_string(), "comic".to_string()]
    }

    fn media_type(&self) -> MediaType {
        MediaType::Comic
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.english_title, self.year)
    }
}
