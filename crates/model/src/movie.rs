//! Movie media model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::stringy;
use crate::media::{MediaType, MediaTypeModel, MEDIA_DB_TAG};
use crate::migrate::hydrate;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieModel {
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

    pub plot: String,
    pub genres: Vec<String>,
    pub director: Vec<String>,
    pub actors: Vec<String>,
    pub image: String,
    pub online_rating: f64,

    pub released: bool,
    pub release_date: String,

    pub user_data: MovieUserData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieUserData {
    pub watched: bool,
    pub personal_rating: f64,
}

impl Default for MovieModel {
    fn default() -> Self {
        Self {
            kind: MediaType::Movie,
            title: String::new(),
            english_title: String::new(),
            year: String::new(),
            data_source: String::new(),
            url: String::new(),
            id: String::new(),
            plot: String::new(),
            genres: Vec::new(),
            director: Vec::new(),
            actors: Vec::new(),
            image: String::new(),
            online_rating: 0.0,
            released: false,
            release_date: String::new(),
            user_data: MovieUserData::default(),
        }
    }
}

impl MovieModel {
    pub fn from_raw(raw: &Value) -> Result<Self> {
        hydrate(raw, MediaType::Movie)
    }
}

impl MediaTypeModel for MovieModel {
    fn tags(&self) -> Vec<String> {
        vec![MEDIA_DB_TAG.to_string(), "movie".to_string()]
    }

    fn media_type(&self) -> MediaType {
        MediaType::Movie
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}
