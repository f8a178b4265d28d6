//! Book media model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::stringy;
use crate::media::{MediaType, MediaTypeModel, MEDIA_DB_TAG};
use crate::migrate::hydrate;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookModel {
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

    pub author: Vec<String>,
    pub plot: String,
    pub pages: i64,
    pub image: String,
    pub online_rating: f64,
    pub isbn: String,

    pub released: bool,
    pub release_date: String,

    pub user_data: BookUserData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookUserData {
    pub read: bool,
    pub personal_rating: f64,
}

impl Default for BookModel {
    fn default() -> Self {
        Self {
            kind: MediaType::Book,
            title: String::new(),
            english_title: String::new(),
            year: String::new(),
            data_source: String::new(),
            url: String::new(),
            id: String::new(),
            author: Vec::new(),
            plot: String::new(),
            pages: 0,
            image: String::new(),
            online_rating: 0.0,
            isbn: String::new(),
            released: false,
            release_date: String::new(),
            user_data: BookUserData::default(),
        }
    }
}

impl BookModel {
    pub fn from_raw(raw: &Value) -> Result<Self> {
        hydrate(raw, MediaType::Book)
    }
}

impl MediaTypeModel for BookModel {
    fn tags(&self) -> Vec<String> {
        vec![MEDIA_DB_TAG.to_string(), "book".to_string()]
    }

    fn media_type(&self) -> MediaType {
        MediaType::Book
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upgrading_an_old_record_fills_new_fields_with_defaults() {
        // A record persisted before `onlineRating` existed.
        let raw = json!({
            "title": "Dune",
            "author": ["Frank Herbert"],
            "userData": {"read": true, "personalRating": 10.0},
        });
        let model = BookModel::from_raw(&raw).unwrap();
        assert_eq!(model.online_rating, 0.0);
        assert!(model.user_data.read);
        assert_eq!(model.author, vec!["Frank Herbert"]);
    }
}
