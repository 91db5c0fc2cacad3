use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// Elements that never carry article text: code, chrome, ads, comment and
/// share widgets, related-news boxes.
pub const NOISE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "iframe",
    "svg",
    "form",
    "button",
    "nav",
    "footer",
    "aside",
    ".advertisement",
    ".ads",
    ".ad",
    "[id^='ads']",
    "[class*='banner']",
    ".social-share",
    ".share",
    ".share-buttons",
    ".social",
    ".comments",
    ".comment",
    "#comments",
    ".box-comment",
    ".related",
    ".related-news",
    ".tin-lien-quan",
    ".breadcrumb",
    ".menu",
    ".navigation",
    ".sidebar",
    ".tags",
];

static NOISE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&NOISE_SELECTORS.join(", ")).expect("noise selectors must parse")
});

/// Detaches every noise element from the document tree.
pub fn strip_noise(document: &mut Html) {
    let ids: Vec<_> = document.select(&NOISE).map(|element| element.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}
