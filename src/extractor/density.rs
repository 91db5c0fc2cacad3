//! Text-density fallback for pages no site family recognises: find the
//! sibling group of text-heavy blocks and treat it as the article body.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::extractor::reader::element_text;
use crate::extractor::reject::{MIN_PARAGRAPH_CHARS, is_valid_paragraph, push_unique};

/// Share of an element's text that must sit directly in it, not in children.
const OWN_TEXT_SHARE: f64 = 0.5;

static CANDIDATES: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, div, section, article, td").expect("density selector must parse"));

/// Paragraphs of the largest group of text-dense siblings, in document order.
pub fn densest_cluster(document: &Html) -> Vec<String> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for element in document.select(&CANDIDATES) {
        let own = own_text_chars(element);
        if own < MIN_PARAGRAPH_CHARS {
            continue;
        }
        let text = element_text(element);
        let total = text.chars().count();
        if total == 0 || (own as f64) / (total as f64) < OWN_TEXT_SHARE {
            continue;
        }
        if !is_valid_paragraph(&text) {
            continue;
        }

        let key = parent_key(element);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => {
                push_unique(members, text);
            }
            None => groups.push((key, vec![text])),
        }
    }

    let mut best: Option<(String, Vec<String>)> = None;
    for group in groups {
        let better = match &best {
            None => true,
            Some((_, current)) => {
                group.1.len() > current.len()
                    || (group.1.len() == current.len() && total_chars(&group.1) > total_chars(current))
            }
        };
        if better {
            best = Some(group);
        }
    }
    best.map(|(_, members)| members).unwrap_or_default()
}

fn own_text_chars(element: ElementRef<'_>) -> usize {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| text.split_whitespace().map(|word| word.chars().count() + 1).sum::<usize>())
        .sum()
}

fn parent_key(element: ElementRef<'_>) -> String {
    let Some(parent) = element.parent().and_then(ElementRef::wrap) else {
        return "root".to_string();
    };
    let value = parent.value();
    let classes: Vec<&str> = value.classes().collect();
    format!(
        "{}#{}.{}",
        value.name(),
        value.id().unwrap_or_default(),
        classes.join(".")
    )
}

fn total_chars(paragraphs: &[String]) -> usize {
    paragraphs.iter().map(|p| p.chars().count()).sum()
}
