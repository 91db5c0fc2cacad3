//! Typed selector table: which markup identifies the article body of each
//! known site family. Adding a site means adding an entry, not code.

use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteFamily {
    pub name: String,
    /// Selector for the article container.
    pub article: String,
    /// Selector for paragraph nodes inside the container.
    pub paragraphs: String,
}

impl SiteFamily {
    pub fn new(name: &str, article: &str, paragraphs: &str) -> Self {
        Self {
            name: name.to_string(),
            article: article.to_string(),
            paragraphs: paragraphs.to_string(),
        }
    }
}

/// Ordered by priority: site-specific families first, generic ones last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorTable {
    pub families: Vec<SiteFamily>,
}

#[derive(Error, Debug)]
pub enum SelectorTableError {
    #[error("failed to read selector table: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid selector table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("selector table has no families")]
    Empty,
}

/// A site family whose selectors parsed successfully.
#[derive(Debug, Clone)]
pub struct CompiledFamily {
    pub name: String,
    pub article: Selector,
    pub paragraphs: Selector,
}

impl SelectorTable {
    pub fn builtin() -> Self {
        let families = vec![
            SiteFamily::new("vnexpress", "article.fck_detail, .fck_detail", "p.Normal, p"),
            SiteFamily::new("tuoitre", "#main-detail-body, .detail-content.afcbc-body", "p"),
            SiteFamily::new("thanhnien", ".detail-content, .detail__content", "p"),
            SiteFamily::new("dantri", ".singular-content, .dt-news__content", "p"),
            SiteFamily::new("vietnamnet", ".maincontent, .content-detail", "p"),
            SiteFamily::new("znews", ".the-article-body", "p"),
            SiteFamily::new("cafef", "#mainContent, .detail-content", "p"),
            SiteFamily::new("laodong", ".art-body, .article-content", "p"),
            SiteFamily::new("nld", ".content-news-detail, .detail-content-body", "p"),
            SiteFamily::new("bbc", "main[role='main'], article", "[data-component='text-block'] p"),
            SiteFamily::new("reuters", "[class*='article-body']", "[data-testid*='paragraph'], p"),
            SiteFamily::new("wordpress", ".entry-content, .post-content, .td-post-content", "p"),
            SiteFamily::new("schema-org", "[itemprop='articleBody']", "p"),
            SiteFamily::new("generic-article", "article", "p"),
            SiteFamily::new("generic-main", "main, [role='main'], #content, .content", "p"),
        ];
        Self { families }
    }

    pub fn from_json(json: &str) -> Result<Self, SelectorTableError> {
        let table: SelectorTable = serde_json::from_str(json)?;
        if table.families.is_empty() {
            return Err(SelectorTableError::Empty);
        }
        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SelectorTableError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parses every family's selectors. Families with an unparsable selector
    /// are skipped with a warning so one typo cannot disable extraction.
    pub fn compile(&self) -> Vec<CompiledFamily> {
        self.families
            .iter()
            .filter_map(|family| {
                match (Selector::parse(&family.article), Selector::parse(&family.paragraphs)) {
                    (Ok(article), Ok(paragraphs)) => Some(CompiledFamily {
                        name: family.name.clone(),
                        article,
                        paragraphs,
                    }),
                    _ => {
                        warn!(family = %family.name, "skipping site family with invalid selector");
                        None
                    }
                }
            })
            .collect()
    }
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_compiles_fully() {
        let table = SelectorTable::builtin();
        assert_eq!(table.compile().len(), table.families.len());
        assert_eq!(table.families.last().unwrap().name, "generic-main");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"families":[{"name":"example","article":".story","paragraphs":"p"}]}"#;
        let table = SelectorTable::from_json(json).unwrap();
        assert_eq!(table.families, vec![SiteFamily::new("example", ".story", "p")]);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            SelectorTable::from_json(r#"{"families":[]}"#),
            Err(SelectorTableError::Empty)
        ));
        assert!(matches!(
            SelectorTable::from_json("not json"),
            Err(SelectorTableError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_selector_is_skipped() {
        let table = SelectorTable {
            families: vec![
                SiteFamily::new("broken", "div[[", "p"),
                SiteFamily::new("fine", "article", "p"),
            ],
        };
        let compiled = table.compile();
        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled[0].name, "fine");
    }
}
