//! ComicVine provider client
//!
//! Searches comic volumes by title and fetches volume detail. Detail
//! lookups chain a second request for the volume's first issue, whose
//! description and cover take precedence over the volume-level ones.

mod apimodel;
mod client;
pub mod models;
mod search;
mod volume;

pub use client::ComicVineApi;

pub type Result<T> = std::result::Result<T, api::ApiError>;
