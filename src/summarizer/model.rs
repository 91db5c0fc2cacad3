use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::summarizer::lexicon::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    pub sentence: String,
    pub score: i32,
    /// Position within the source sequence; restores reading order after
    /// score-based selection.
    pub index: usize,
    /// Length in characters.
    pub length: usize,
}

impl ScoredSentence {
    pub fn new(sentence: String, score: i32, index: usize) -> Self {
        let length = sentence.chars().count();
        Self {
            sentence,
            score,
            index,
            length,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summarized_paragraphs: Vec<String>,
    pub summary: String,
    pub original_paragraph_count: usize,
    pub summarized_paragraph_count: usize,
}

impl SummaryResult {
    pub fn new(summarized_paragraphs: Vec<String>, original_paragraph_count: usize) -> Self {
        Self {
            summary: summarized_paragraphs.join("\n\n"),
            summarized_paragraph_count: summarized_paragraphs.len(),
            summarized_paragraphs,
            original_paragraph_count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BulletSet {
    /// Marker-prefixed bullet lines.
    pub bullets: Vec<String>,
    /// The bullets joined by newlines.
    pub text: String,
}

impl BulletSet {
    pub fn new(bullets: Vec<String>) -> Self {
        Self {
            text: bullets.join("\n"),
            bullets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub original_length: usize,
    pub summary_length: usize,
    /// `summary_length / original_length` as a rounded integer percent.
    pub compression_ratio: u32,
    pub original_paragraph_count: usize,
    pub summarized_paragraph_count: usize,
    /// The percentage the caller asked for, after clamping.
    pub summary_percent: u8,
    /// The percentage actually achieved, to one decimal.
    pub actual_percent: f64,
}

impl SummaryStats {
    pub fn compute(
        original_length: usize,
        summary_length: usize,
        result: &SummaryResult,
        summary_percent: u8,
    ) -> Self {
        let ratio = if original_length == 0 {
            0.0
        } else {
            summary_length as f64 / original_length as f64 * 100.0
        };
        Self {
            original_length,
            summary_length,
            compression_ratio: ratio.round() as u32,
            original_paragraph_count: result.original_paragraph_count,
            summarized_paragraph_count: result.summarized_paragraph_count,
            summary_percent,
            actual_percent: (ratio * 10.0).round() / 10.0,
        }
    }
}

/// Everything the orchestrator hands back for one article. Holds no document
/// references and serializes straight to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryOutput {
    pub full_content: String,
    pub original_paragraphs: Vec<String>,
    pub summarized_paragraphs: Vec<String>,
    pub summary: String,
    pub bullets: Vec<String>,
    pub language: Language,
    pub stats: SummaryStats,
}

/// Tunable thresholds of the summarizer. Card previews and detail views use
/// different bullet ceilings through this struct rather than separate code
/// paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummaryConfig {
    pub bullet_marker: String,
    /// Bullets longer than this are cut at a natural break.
    pub max_bullet_length: usize,
    /// Sentences longer than this never become bullets.
    pub max_sentence_length: usize,
    /// Sentences shorter than this never become bullets.
    pub min_sentence_length: usize,
    /// Score above which adjacency to a chosen bullet is tolerated.
    pub adjacency_override_score: i32,
    pub default_max_bullets: usize,
    pub default_max_total_length: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            bullet_marker: "• ".to_string(),
            max_bullet_length: 180,
            max_sentence_length: 300,
            min_sentence_length: 20,
            adjacency_override_score: 10,
            default_max_bullets: 3,
            default_max_total_length: 400,
        }
    }
}
