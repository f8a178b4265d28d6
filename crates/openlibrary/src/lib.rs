//! Open Library provider client
//!
//! Searches books by title and fetches work detail. Open Library keeps
//! author names on a separate endpoint, so detail lookups chain one
//! request per record to resolve the first listed author.
//!
//! No API key is required by this provider.

mod apimodel;
mod client;
pub mod models;
mod search;
mod work;

pub use client::OpenLibraryApi;

pub type Result<T> = std::result::Result<T, api::ApiError>;
