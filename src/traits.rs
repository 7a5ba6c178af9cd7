//! Traits and interfaces for source-agnostic page fetching

use async_trait::async_trait;

use crate::fetcher::FetchError;

/// A paginated source of raw listing HTML.
///
/// The production implementation issues one HTTP GET per page; tests
/// substitute an in-memory stub so the collector runs without a network.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the raw body of one listing page.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    ///
    /// # Returns
    /// * `Result<Vec<u8>, FetchError>` - The full response body, or why the
    ///   page could not be fetched
    async fn fetch_page(&self, page: u32) -> Result<Vec<u8>, FetchError>;
}
