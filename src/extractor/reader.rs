use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::extractor::model::{PageMetadata, collapse_whitespace};
use crate::extractor::reject::{is_valid_paragraph, push_unique};
use crate::extractor::selectors::CompiledFamily;

/// A family that yields more than this many paragraphs wins outright.
const SHORT_CIRCUIT_PARAGRAPHS: usize = 2;

static LEAD: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        ".sapo, [class*='sapo'], .lead, .description, .excerpt, .intro, .chapeau, [class*='chapeau']",
    )
    .expect("lead selector must parse")
});
static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[property='og:title']").expect("og:title selector must parse"));
static OG_SITE_NAME: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[property='og:site_name']").expect("og:site_name selector must parse")
});
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("title selector must parse"));
static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("h1 selector must parse"));

/// Visible text of an element with whitespace collapsed.
pub fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Walks the site families in priority order and returns paragraphs from the
/// first family that yields more than two, otherwise the best partial result.
pub fn collect_from_table(document: &Html, families: &[CompiledFamily]) -> Vec<String> {
    let mut best: Vec<String> = Vec::new();

    for family in families {
        let mut collected = Vec::new();
        for container in document.select(&family.article) {
            for node in container.select(&family.paragraphs) {
                let text = element_text(node);
                if is_valid_paragraph(&text) {
                    push_unique(&mut collected, text);
                }
            }
        }

        if collected.len() > SHORT_CIRCUIT_PARAGRAPHS {
            debug!(family = %family.name, paragraphs = collected.len(), "site family matched");
            return collected;
        }
        if collected.len() > best.len() {
            best = collected;
        }
    }

    best
}

/// The article's lead (sapo) paragraph, if the page marks one.
pub fn extract_lead(document: &Html) -> Option<String> {
    document
        .select(&LEAD)
        .map(element_text)
        .find(|text| is_valid_paragraph(text))
}

pub fn extract_metadata(document: &Html) -> PageMetadata {
    PageMetadata {
        title: extract_title(document),
        site_name: extract_site_name(document),
    }
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .filter_map(|element| element.value().attr("content"))
        .map(collapse_whitespace)
        .find(|content| !content.is_empty())
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .map(element_text)
        .find(|text| !text.is_empty())
}

fn extract_title(document: &Html) -> Option<String> {
    meta_content(document, &OG_TITLE)
        .or_else(|| first_text(document, &TITLE))
        .or_else(|| first_text(document, &H1))
}

fn extract_site_name(document: &Html) -> Option<String> {
    if let Some(name) = meta_content(document, &OG_SITE_NAME) {
        return Some(name);
    }

    // "Article Title - Site Name" or "Article Title | Site Name"
    let title = first_text(document, &TITLE)?;
    [" - ", " | "]
        .iter()
        .filter_map(|separator| title.rfind(separator).map(|pos| pos + separator.len()))
        .max()
        .map(|start| title[start..].trim().to_string())
        .filter(|name| !name.is_empty())
}
