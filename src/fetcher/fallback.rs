use async_trait::async_trait;
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::fetcher::{FetchError, PageFetcher, PageResponse};

/// Tries each fetcher in order. Moves on only when the failure is retriable;
/// fatal errors such as an invalid URL are returned immediately.
pub struct FallbackFetcher {
    fetchers: Vec<Arc<dyn PageFetcher>>,
}

impl FallbackFetcher {
    pub fn new(fetchers: Vec<Arc<dyn PageFetcher>>) -> Self {
        Self { fetchers }
    }
}

#[async_trait]
impl PageFetcher for FallbackFetcher {
    #[instrument(skip_all, fields(url = %url))]
    async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let mut last_error = None;
        for (attempt, fetcher) in self.fetchers.iter().enumerate() {
            match fetcher.fetch(url).await {
                Ok(page) => return Ok(page),
                Err(err) if err.should_retry() => {
                    warn!(attempt, error = %err, "fetch failed, trying next fetcher");
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_error.unwrap_or_else(|| FetchError::Unknown("no fetcher configured".to_string())))
    }
}
