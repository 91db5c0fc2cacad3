use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

use crate::api::dtos::SummarizeResponse;
use crate::cache::Cache;
use crate::config::Config;
use crate::extractor::{Extractor, SelectorTable};
use crate::fetcher::client::BROWSER_USER_AGENT;
use crate::fetcher::{FallbackFetcher, HttpFetcher, PageFetcher};
use crate::summarizer::{SummaryConfig, Summarizer};

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    pub cache: Arc<dyn Cache<SummarizeResponse>>,
    pub summarizer: Arc<Summarizer>,
    pub cache_ttl: Duration,
}

impl AppState {
    /// Production wiring: the bot-identified fetcher first, a browser
    /// identity second, and the configured selector table.
    pub fn from_config(
        config: &Config,
        cache: Arc<dyn Cache<SummarizeResponse>>,
    ) -> anyhow::Result<Self> {
        let table = match config.selector_table_path() {
            Some(path) => SelectorTable::load(path)
                .with_context(|| format!("loading selector table {}", path.display()))?,
            None => SelectorTable::builtin(),
        };

        let fetcher = FallbackFetcher::new(vec![
            Arc::new(HttpFetcher::new(config)?),
            Arc::new(HttpFetcher::with_user_agent(config, BROWSER_USER_AGENT)?),
        ]);

        Ok(Self {
            fetcher: Arc::new(fetcher),
            cache,
            summarizer: Arc::new(Summarizer::new(Extractor::new(&table), SummaryConfig::default())),
            cache_ttl: config.cache_ttl(),
        })
    }
}
