pub mod bullets;
pub mod lexicon;
pub mod model;
pub mod numeric;
pub mod paragraph;
pub mod scorer;
pub mod sentences;
pub mod text;

pub use lexicon::Language;
pub use model::{BulletSet, SummaryConfig, SummaryOutput, SummaryResult, SummaryStats};

use once_cell::sync::Lazy;
use scraper::Html;
use tracing::debug;

use crate::extractor::language::scoring_language;
use crate::extractor::{ExtractedContent, Extractor};
use crate::summarizer::numeric::{protect_numbers, restore_numbers};
use crate::summarizer::paragraph::summarize_by_paragraphs;
use crate::summarizer::text::char_len;

pub const MIN_PERCENT: u32 = 1;
pub const MAX_PERCENT: u32 = 100;

static DEFAULT_SUMMARIZER: Lazy<Summarizer> = Lazy::new(Summarizer::default);

/// Extraction plus percent-controlled summarization of one article.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    extractor: Extractor,
    config: SummaryConfig,
}

impl Summarizer {
    pub fn new(extractor: Extractor, config: SummaryConfig) -> Self {
        Self { extractor, config }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn extract_and_summarize(&self, document: &Html, summary_percent: u32) -> SummaryOutput {
        let content = self.extractor.extract(document);
        self.summarize_content(&content, summary_percent)
    }

    /// Summarizes already extracted paragraphs. `summary_percent` is clamped
    /// to 1..=100; empty content yields an empty summary.
    pub fn summarize_content(&self, content: &ExtractedContent, summary_percent: u32) -> SummaryOutput {
        let percent = clamp_percent(summary_percent);
        let language = scoring_language(&content.full_content);
        let lexicon = lexicon::for_language(language);

        let protected: Vec<String> = content.paragraphs.iter().map(|p| protect_numbers(p)).collect();
        let summarized = summarize_by_paragraphs(&protected, f64::from(percent) / 100.0, lexicon);
        let result = SummaryResult::new(
            summarized
                .summarized_paragraphs
                .iter()
                .map(|p| restore_numbers(p))
                .collect(),
            summarized.original_paragraph_count,
        );

        let bullets: Vec<String> = result
            .summarized_paragraphs
            .iter()
            .take(max_bullets_for_percent(percent))
            .map(|p| format!("{}{p}", self.config.bullet_marker))
            .collect();

        let stats = SummaryStats::compute(
            char_len(&content.full_content),
            char_len(&result.summary),
            &result,
            percent,
        );
        debug!(
            percent,
            language = language.code(),
            original = stats.original_length,
            summary = stats.summary_length,
            "summarized article"
        );

        SummaryOutput {
            full_content: content.full_content.clone(),
            original_paragraphs: content.paragraphs.clone(),
            summarized_paragraphs: result.summarized_paragraphs,
            summary: result.summary,
            bullets,
            language,
            stats,
        }
    }

    /// Length-bounded bullets for card and detail views. `None` falls back to
    /// the configured defaults.
    pub fn bullet_points(
        &self,
        text: &str,
        max_bullets: Option<usize>,
        max_total_length: Option<usize>,
    ) -> BulletSet {
        let lexicon = lexicon::for_language(scoring_language(text));
        let protected = protect_numbers(text);
        let set = bullets::create_bullets(
            &protected,
            max_bullets.unwrap_or(self.config.default_max_bullets),
            max_total_length.unwrap_or(self.config.default_max_total_length),
            &self.config,
            lexicon,
        );
        BulletSet::new(set.bullets.iter().map(|b| restore_numbers(b)).collect())
    }
}

/// Number of summarized paragraphs surfaced as bullets for a percentage.
pub fn max_bullets_for_percent(percent: u8) -> usize {
    match percent {
        0..=30 => 3,
        31..=90 => usize::from(percent).div_ceil(10),
        _ => 10,
    }
}

fn clamp_percent(percent: u32) -> u8 {
    // Lossless: the value is within 1..=100 after clamping.
    percent.clamp(MIN_PERCENT, MAX_PERCENT) as u8
}

/// [`Summarizer::extract_and_summarize`] with built-in defaults.
pub fn extract_and_summarize_content(document: &Html, summary_percent: u32) -> SummaryOutput {
    DEFAULT_SUMMARIZER.extract_and_summarize(document, summary_percent)
}

/// [`Summarizer::bullet_points`] with built-in defaults: 3 bullets within 400
/// characters.
pub fn create_bullet_point_summary(
    text: &str,
    max_bullets: Option<usize>,
    max_total_length: Option<usize>,
) -> BulletSet {
    DEFAULT_SUMMARIZER.bullet_points(text, max_bullets, max_total_length)
}
