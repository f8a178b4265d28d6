//! ComicVine wire format
//!
//! Every field a payload might omit is an `Option`; absence is expected
//! drift, not an error.

use serde::Deserialize;

/// Response from GET /search?resources=volume
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Volume>,
}

/// Response from GET /volume/4050-{id}/
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeResponse {
    #[serde(default)]
    pub results: Volume,
}

/// Response from GET /issue/4000-{id}/
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueResponse {
    #[serde(default)]
    pub results: Issue,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Volume {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub start_year: Option<String>,
    pub site_detail_url: Option<String>,
    pub description: Option<String>,
    pub image: Option<Image>,
    pub original_release_date: Option<String>,
    pub first_issue: Option<IssueRef>,
    pub publisher: Option<Publisher>,
    pub issues: Option<Vec<IssueRef>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    pub id: Option<i64>,
    pub description: Option<String>,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueRef {
    pub id: Option<i64>,
    pub issue_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    pub super_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Publisher {
    pub name: Option<String>,
}
