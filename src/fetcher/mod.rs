pub mod client;
pub mod errors;
pub mod fallback;
pub mod pipeline;
pub mod types;

pub use client::HttpFetcher;
pub use errors::FetchError;
pub use fallback::FallbackFetcher;
pub use types::{Charset, PageResponse};

use async_trait::async_trait;

/// Source of article pages. The route layer depends on this trait so tests
/// can substitute canned pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError>;
}
