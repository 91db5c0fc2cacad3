//! Last-resort tiers for pages with little or no recognisable article
//! markup: meta descriptions and a block-aware scan of the whole body.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

use crate::extractor::model::collapse_whitespace;
use crate::extractor::reject::push_unique;
use crate::summarizer::lexicon::is_boilerplate;

/// Body chunks must be longer than this to count.
pub const MIN_CHUNK_CHARS: usize = 100;
/// At most this many chunks survive the body scan.
pub const MAX_CHUNKS: usize = 10;

static META_DESCRIPTIONS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "meta[property='og:description']",
        "meta[name='description']",
        "meta[property='article:description'], meta[name='article:description']",
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("meta selector must parse"))
    .collect()
});
static BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("body").expect("body selector must parse"));
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line regex must compile"));

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "blockquote", "dd", "div", "dl", "dt", "figcaption", "figure", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "li", "main", "ol", "p", "pre", "section", "table", "td",
    "th", "tr", "ul",
];

/// Page descriptions in priority order: Open Graph, standard, article.
pub fn meta_descriptions(document: &Html) -> Vec<String> {
    let mut descriptions = Vec::new();
    for selector in META_DESCRIPTIONS.iter() {
        for element in document.select(selector) {
            if let Some(content) = element.value().attr("content") {
                push_unique(&mut descriptions, collapse_whitespace(content));
            }
        }
    }
    descriptions
}

/// The longest non-boilerplate text chunks of the body, in document order.
pub fn longest_chunks(document: &Html) -> Vec<String> {
    let Some(body) = document.select(&BODY).next() else {
        return Vec::new();
    };

    let mut raw = String::new();
    block_text(body, &mut raw);

    let mut chunks: Vec<(usize, String)> = BLANK_LINES
        .split(&raw)
        .map(collapse_whitespace)
        .filter(|chunk| chunk.chars().count() > MIN_CHUNK_CHARS && !is_boilerplate(chunk))
        .enumerate()
        .collect();

    chunks.sort_by(|a, b| {
        b.1.chars()
            .count()
            .cmp(&a.1.chars().count())
            .then(a.0.cmp(&b.0))
    });
    chunks.truncate(MAX_CHUNKS);
    chunks.sort_by_key(|(position, _)| *position);

    let mut paragraphs = Vec::new();
    for (_, chunk) in chunks {
        push_unique(&mut paragraphs, chunk);
    }
    paragraphs
}

// Renders visible text with a blank line around every block element.
fn block_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let Some(child_element) = ElementRef::wrap(child) else {
                    continue;
                };
                if el.name() == "br" {
                    out.push('\n');
                    continue;
                }
                let block = BLOCK_TAGS.contains(&el.name());
                if block {
                    out.push_str("\n\n");
                }
                block_text(child_element, out);
                if block {
                    out.push_str("\n\n");
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_descriptions_in_priority_order() {
        let document = Html::parse_document(
            r#"<html><head>
                <meta name="description" content="Mô tả tiêu chuẩn của trang">
                <meta property="og:description" content="Mô tả Open Graph của trang">
                <meta property="article:description" content="Mô tả Open Graph của trang">
            </head></html>"#,
        );
        assert_eq!(
            meta_descriptions(&document),
            vec![
                "Mô tả Open Graph của trang".to_string(),
                "Mô tả tiêu chuẩn của trang".to_string()
            ]
        );
    }

    #[test]
    fn test_longest_chunks_keep_document_order() {
        let long_a = "Đoạn mở đầu rất dài ".repeat(8);
        let long_b = "Đoạn kết luận còn dài hơn nữa ".repeat(8);
        let html = format!(
            "<body><span>{long_a}</span><div>ngắn</div><span>{long_b}</span></body>"
        );
        let document = Html::parse_document(&html);
        let chunks = longest_chunks(&document);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].starts_with("Đoạn mở đầu"));
        assert!(chunks[1].starts_with("Đoạn kết luận"));
    }

    #[test]
    fn test_longest_chunks_caps_count() {
        let body: String = (0..15)
            .map(|i| format!("<p>Đoạn số {i} {}</p>", "có nội dung đủ dài để vượt ngưỡng ".repeat(4)))
            .collect();
        let document = Html::parse_document(&format!("<body>{body}</body>"));
        assert_eq!(longest_chunks(&document).len(), MAX_CHUNKS);
    }
}
