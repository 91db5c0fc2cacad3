use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Paragraphs of one article body, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedContent {
    /// The paragraphs joined by blank lines.
    pub full_content: String,
    pub paragraphs: Vec<String>,
    pub paragraph_count: usize,
}

impl ExtractedContent {
    pub fn from_paragraphs(paragraphs: Vec<String>) -> Self {
        Self {
            full_content: paragraphs.join("\n\n"),
            paragraph_count: paragraphs.len(),
            paragraphs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: Option<String>,
    pub site_name: Option<String>,
}

/// Collapses every whitespace run, newlines included, into one space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paragraphs_invariants() {
        let content = ExtractedContent::from_paragraphs(vec!["Một".into(), "Hai".into(), "Ba".into()]);
        assert_eq!(content.full_content, "Một\n\nHai\n\nBa");
        assert_eq!(content.paragraph_count, 3);
        assert!(!content.is_empty());
        assert!(ExtractedContent::from_paragraphs(Vec::new()).is_empty());
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Xin \n\t chào\u{a0}bạn  "), "Xin chào bạn");
    }
}
