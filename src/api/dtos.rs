use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::extractor::PageMetadata;
use crate::summarizer::{Language, SummaryOutput, SummaryStats};

pub const DEFAULT_PERCENT: u32 = 50;
/// Upper bound on text submitted for bullet extraction.
pub const MAX_BULLET_TEXT_CHARS: usize = 100_000;
pub const MAX_BULLETS: usize = 20;

fn default_percent() -> u32 {
    DEFAULT_PERCENT
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    /// Article URL (http or https).
    pub url: String,
    /// Share of the article to keep, 1 to 100.
    #[serde(default = "default_percent")]
    pub percent: u32,
}

impl SummarizeRequest {
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(self.url.trim()).map_err(|_| "Invalid URL".to_string())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err("URL must use http or https".to_string());
        }
        if !(1..=100).contains(&self.percent) {
            return Err("Percent must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub url: String,
    pub title: Option<String>,
    pub site_name: Option<String>,
    pub language: Language,
    pub needs_translation: bool,
    pub bullets: Vec<String>,
    /// Summarized paragraphs in reading order.
    pub paragraphs: Vec<String>,
    pub summary: String,
    pub percentage: u8,
    pub stats: SummaryStats,
    /// When the page was downloaded. Cached responses keep the original time.
    pub fetched_at: DateTime<Utc>,
    /// True when served from the cache.
    pub cached: bool,
}

impl SummarizeResponse {
    pub fn new(
        url: String,
        metadata: PageMetadata,
        output: SummaryOutput,
        needs_translation: bool,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            url,
            title: metadata.title,
            site_name: metadata.site_name,
            language: output.language,
            needs_translation,
            bullets: output.bullets,
            paragraphs: output.summarized_paragraphs,
            summary: output.summary,
            percentage: output.stats.summary_percent,
            stats: output.stats,
            fetched_at,
            cached: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulletsRequest {
    pub text: String,
    /// Defaults to 3.
    pub max_bullets: Option<usize>,
    /// Defaults to 400 characters, markers and line breaks included.
    pub max_total_length: Option<usize>,
}

impl BulletsRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("Text must not be empty".to_string());
        }
        if self.text.chars().count() > MAX_BULLET_TEXT_CHARS {
            return Err("Text too long".to_string());
        }
        if matches!(self.max_bullets, Some(n) if n == 0 || n > MAX_BULLETS) {
            return Err(format!("maxBullets must be between 1 and {MAX_BULLETS}"));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
