use crate::summarizer::lexicon::Lexicon;
use crate::summarizer::model::{ScoredSentence, SummaryResult};
use crate::summarizer::scorer::{rank, score_sentences};
use crate::summarizer::sentences::split_sentences;
use crate::summarizer::text::{char_len, truncate_near};

/// Paragraphs shorter than this are returned untouched.
pub const MIN_SUMMARIZABLE_CHARS: usize = 50;
/// Paragraph summaries shorter than this are dropped as noise.
pub const MIN_PARAGRAPH_CHARS: usize = 20;

const LONG_SINGLE_SENTENCE_CHARS: usize = 200;
const AGGRESSIVE_RATIO: f64 = 0.5;
const OVERSHOOT_TOLERANCE: f64 = 1.2;
const FORCED_COMPRESSION_SHARE: f64 = 0.85;
const MERGE_RATIO: f64 = 0.4;
const MERGE_MIN_PARAGRAPHS: usize = 5;

// (requested ratio upper bound, effective retain ratio)
const RATIO_BUCKETS: [(f64, f64); 7] = [
    (0.30, 0.30),
    (0.40, 0.40),
    (0.50, 0.50),
    (0.60, 0.58),
    (0.70, 0.65),
    (0.80, 0.72),
    (0.90, 0.78),
];
const MAX_EFFECTIVE_RATIO: f64 = 0.85;

/// Maps a requested ratio onto a small set of retain ratios so neighbouring
/// percentages still produce visibly different lengths.
pub fn effective_ratio(requested: f64) -> f64 {
    let requested = requested.clamp(0.0, 1.0);
    RATIO_BUCKETS
        .iter()
        .find(|(upper, _)| requested <= *upper)
        .map(|(_, effective)| *effective)
        .unwrap_or(MAX_EFFECTIVE_RATIO)
}

/// Compresses one paragraph to roughly `target_ratio` of its length by
/// keeping its highest-scoring sentences in their original order.
///
/// Short paragraphs and single sentences come back unchanged, except that a
/// long single sentence under an aggressive ratio is cut at the comma or
/// semicolon nearest the target. A lower ratio never yields a longer result.
pub fn summarize_paragraph(paragraph: &str, target_ratio: f64, lexicon: &Lexicon) -> String {
    let paragraph = paragraph.trim();
    let total = char_len(paragraph);
    if total < MIN_SUMMARIZABLE_CHARS {
        return paragraph.to_string();
    }

    let requested = target_ratio.clamp(0.0, 1.0);
    let ratio = effective_ratio(requested);
    let target = total as f64 * ratio;

    let sentences = split_sentences(paragraph);
    if sentences.len() <= 1 {
        if total > LONG_SINGLE_SENTENCE_CHARS && requested < AGGRESSIVE_RATIO {
            return truncate_near(paragraph, target.round() as usize)
                .unwrap_or_else(|| paragraph.to_string());
        }
        return paragraph.to_string();
    }

    let scored = score_sentences(&sentences, lexicon);
    let mut candidates: Vec<ScoredSentence> =
        scored.iter().filter(|s| s.score > 0).cloned().collect();
    if candidates.is_empty() {
        candidates.push(scored[0].clone());
    }
    rank(&mut candidates);

    let mut result = join_in_order(select_within(&candidates, target));

    if requested < AGGRESSIVE_RATIO
        && char_len(&result) as f64 > total as f64 * FORCED_COMPRESSION_SHARE
    {
        let mut ranked = scored;
        rank(&mut ranked);
        let keep = ((sentences.len() as f64 * ratio).floor() as usize).max(1);
        ranked.truncate(keep);
        let forced = join_in_order(ranked);
        if char_len(&forced) < char_len(&result) {
            result = forced;
        }
    }

    result
}

/// Summarizes each paragraph, drops noise-length results and, under very
/// aggressive ratios, merges neighbouring paragraphs pairwise so the summary
/// does not fragment into many one-liners.
pub fn summarize_by_paragraphs(
    paragraphs: &[String],
    summary_ratio: f64,
    lexicon: &Lexicon,
) -> SummaryResult {
    let ratio = summary_ratio.clamp(0.0, 1.0);
    let mut summarized: Vec<String> = paragraphs
        .iter()
        .map(|p| summarize_paragraph(p, ratio, lexicon))
        .filter(|s| char_len(s) >= MIN_PARAGRAPH_CHARS)
        .collect();

    // Pairs are merged by position only, not by topic.
    if ratio <= MERGE_RATIO && summarized.len() > MERGE_MIN_PARAGRAPHS {
        summarized = summarized.chunks(2).map(|pair| pair.join(" ")).collect();
    }

    SummaryResult::new(summarized, paragraphs.len())
}

// Takes the longest prefix of the ranking that stays within the overshoot
// tolerance, stopping once the target is met. Always keeps the top sentence.
fn select_within(ranked: &[ScoredSentence], target: f64) -> Vec<ScoredSentence> {
    let ceiling = target * OVERSHOOT_TOLERANCE;
    let mut selected: Vec<ScoredSentence> = Vec::new();
    let mut running = 0usize;

    for sentence in ranked {
        if running as f64 >= target {
            break;
        }
        let grown = running + sentence.length + usize::from(!selected.is_empty());
        if grown as f64 > ceiling {
            break;
        }
        running = grown;
        selected.push(sentence.clone());
    }

    if selected.is_empty()
        && let Some(top) = ranked.first()
    {
        selected.push(top.clone());
    }
    selected
}

fn join_in_order(mut sentences: Vec<ScoredSentence>) -> String {
    sentences.sort_by_key(|s| s.index);
    sentences
        .into_iter()
        .map(|s| s.sentence)
        .collect::<Vec<_>>()
        .join(" ")
}
