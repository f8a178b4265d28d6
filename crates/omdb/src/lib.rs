//! OMDb provider client
//!
//! Searches movies by title and fetches full detail by IMDb identifier.
//! OMDb reports some failures in-band with HTTP 200 and
//! `"Response": "False"`; searches treat that as an empty result set,
//! detail lookups as a parse failure.

mod apimodel;
mod client;
pub mod models;
mod search;

pub use client::OmdbApi;

pub type Result<T> = std::result::Result<T, api::ApiError>;
