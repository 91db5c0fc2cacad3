pub mod cleaner;
pub mod density;
pub mod fallback;
pub mod language;
pub mod model;
pub mod reader;
pub mod reject;
pub mod selectors;

#[cfg(test)]
mod tests;

pub use model::{ExtractedContent, PageMetadata};
pub use selectors::{SelectorTable, SelectorTableError, SiteFamily};

use once_cell::sync::Lazy;
use scraper::Html;
use tracing::debug;

use crate::extractor::reject::{overlaps, push_unique};
use crate::extractor::selectors::CompiledFamily;

/// Below this many paragraphs the text-density tier runs.
pub const MIN_SELECTOR_PARAGRAPHS: usize = 3;
/// Below this many characters meta descriptions are added.
pub const META_FALLBACK_CHARS: usize = 100;
/// Below this many characters the body scan may replace the result.
pub const BODY_SCAN_CHARS: usize = 500;

static DEFAULT_EXTRACTOR: Lazy<Extractor> = Lazy::new(Extractor::default);

/// Multi-tier article extractor. Holds the compiled site selector table and
/// never mutates the caller's document.
#[derive(Debug, Clone)]
pub struct Extractor {
    families: Vec<CompiledFamily>,
}

impl Extractor {
    pub fn new(table: &SelectorTable) -> Self {
        Self {
            families: table.compile(),
        }
    }

    pub fn extract(&self, document: &Html) -> ExtractedContent {
        let mut document = document.clone();
        cleaner::strip_noise(&mut document);

        // 1. Known site families
        let mut paragraphs = reader::collect_from_table(&document, &self.families);
        debug!(paragraphs = paragraphs.len(), "selector table pass");

        // 2. Text density
        if paragraphs.len() < MIN_SELECTOR_PARAGRAPHS {
            let dense = density::densest_cluster(&document);
            debug!(paragraphs = dense.len(), "text density fallback");
            for paragraph in dense {
                push_unique(&mut paragraphs, paragraph);
            }
        }

        // 3. Lead paragraph
        if let Some(lead) = reader::extract_lead(&document)
            && !overlaps(&paragraphs, &lead)
        {
            debug!("prepending lead paragraph");
            paragraphs.insert(0, lead);
        }

        // 4. Meta descriptions
        if total_chars(&paragraphs) < META_FALLBACK_CHARS {
            let descriptions = fallback::meta_descriptions(&document);
            debug!(descriptions = descriptions.len(), "meta description fallback");
            for description in descriptions {
                push_unique(&mut paragraphs, description);
            }
        }

        // 5. Whole-body scan
        if total_chars(&paragraphs) < BODY_SCAN_CHARS {
            let chunks = fallback::longest_chunks(&document);
            if total_chars(&chunks) > total_chars(&paragraphs) {
                debug!(chunks = chunks.len(), "body scan replaced extraction");
                paragraphs = chunks;
            }
        }

        ExtractedContent::from_paragraphs(paragraphs)
    }

    pub fn metadata(&self, document: &Html) -> PageMetadata {
        reader::extract_metadata(document)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&SelectorTable::builtin())
    }
}

/// Extracts with the built-in selector table.
pub fn extract(document: &Html) -> ExtractedContent {
    DEFAULT_EXTRACTOR.extract(document)
}

fn total_chars(paragraphs: &[String]) -> usize {
    paragraphs.iter().map(|p| p.chars().count()).sum()
}
