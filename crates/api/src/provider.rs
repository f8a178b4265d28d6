//! Provider client trait definition

use async_trait::async_trait;
use model::{MediaModel, MediaType};

use crate::ApiError;

/// Contract every provider client satisfies
///
/// A client is associated with exactly one provider and a fixed set of
/// supported media kinds. Neither operation retries, caches, or falls back
/// to another provider; every failure surfaces to the immediate caller.
#[async_trait]
pub trait MediaApi: Send + Sync {
    fn api_name(&self) -> &'static str;

    fn api_description(&self) -> &'static str;

    /// Base endpoint of the provider.
    fn api_url(&self) -> &'static str;

    /// Media kinds this provider can produce.
    fn types(&self) -> &'static [MediaType];

    /// Search the provider by free text.
    ///
    /// Returns candidate matches in the provider's own order, bounded by
    /// per-provider result limits. No additional sorting is imposed.
    async fn search_by_title(&self, title: &str) -> Result<Vec<MediaModel>, ApiError>;

    /// Fetch one fully detailed record by provider-scoped identifier.
    ///
    /// Chained secondary requests run strictly sequentially; if any of
    /// them fails the whole operation fails, never returning a partially
    /// populated record.
    async fn get_by_id(&self, id: &str) -> Result<MediaModel, ApiError>;
}
