use regex::Regex;
use std::sync::LazyLock;

use crate::summarizer::lexicon::{self, Lexicon, contains_any, count_phrase};
use crate::summarizer::model::ScoredSentence;

const SHORT_SENTENCE_CHARS: usize = 20;
const LONG_SENTENCE_CHARS: usize = 200;
const SWEET_SPOT: std::ops::RangeInclusive<usize> = 50..=150;

const SHORT_PENALTY: i32 = -10;
const LONG_PENALTY: i32 = -2;
const BOILERPLATE_PENALTY: i32 = -20;

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,2}/\d{1,2}(/\d{2,4})?\b|\b(19|20)\d{2}\b").unwrap()
});

/// Relevance score of one sentence at `index` within a sequence of `total`.
///
/// Signals are additive: length shape, factual content (numbers, money,
/// trends, dates, attribution, quotes, purpose clauses, capitalised names,
/// importance keywords), journalistic position (lede, second sentence,
/// closing line) and a heavy penalty for boilerplate.
pub fn score_sentence(sentence: &str, index: usize, total: usize, lexicon: &Lexicon) -> i32 {
    let trimmed = sentence.trim();
    let length = trimmed.chars().count();
    let lower = trimmed.to_lowercase();
    let mut score = 0;

    if length < SHORT_SENTENCE_CHARS {
        score += SHORT_PENALTY;
    } else if length > LONG_SENTENCE_CHARS {
        score += LONG_PENALTY;
    } else if SWEET_SPOT.contains(&length) {
        score += 3;
    } else {
        score += 1;
    }

    if trimmed.chars().any(|c| c.is_ascii_digit()) {
        score += 2;
    }
    if trimmed.contains('%') || contains_any(&lower, lexicon.percent) {
        score += 2;
    }
    if trimmed.contains(['$', '€', '£', '₫']) || contains_any(&lower, lexicon.currency) {
        score += 3;
    }
    if contains_any(&lower, lexicon.trend) {
        score += 2;
    }
    if DATE_REGEX.is_match(trimmed) || contains_any(&lower, lexicon.period) {
        score += 1;
    }
    if contains_any(&lower, lexicon.attribution) {
        score += 2;
    }
    if trimmed.contains(['"', '“', '”']) {
        score += 1;
    }
    if contains_any(&lower, lexicon.purpose) {
        score += 1;
    }
    if capitalised_words(trimmed) >= 2 {
        score += 2;
    }
    score += lexicon
        .importance
        .iter()
        .map(|word| count_phrase(&lower, word) as i32)
        .sum::<i32>();

    score += position_bonus(index, total);

    if lexicon::is_boilerplate(trimmed) {
        score += BOILERPLATE_PENALTY;
    }

    score
}

/// Scores every sentence of a sequence, keeping its position for later
/// tie-breaking and order restoration.
pub fn score_sentences(sentences: &[String], lexicon: &Lexicon) -> Vec<ScoredSentence> {
    let total = sentences.len();
    sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            ScoredSentence::new(sentence.clone(), score_sentence(sentence, index, total, lexicon), index)
        })
        .collect()
}

/// Highest score first; equal scores keep document order.
pub fn rank(scored: &mut [ScoredSentence]) {
    scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
}

fn position_bonus(index: usize, total: usize) -> i32 {
    match index {
        0 => 5,
        1 => 3,
        i if total > 2 && i == total - 1 => 2,
        _ => 0,
    }
}

// Words after the first that start with an uppercase letter: a cheap proxy
// for people, places and organisations.
fn capitalised_words(sentence: &str) -> usize {
    sentence
        .split_whitespace()
        .skip(1)
        .filter(|word| {
            word.trim_start_matches(|c: char| !c.is_alphanumeric())
                .chars()
                .next()
                .is_some_and(char::is_uppercase)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::lexicon::{ENGLISH, VIETNAMESE};

    #[test]
    fn test_short_fragments_score_negative() {
        assert!(score_sentence("Ảnh minh họa.", 3, 10, &VIETNAMESE) < 0);
    }

    #[test]
    fn test_numbers_and_money_raise_score() {
        let plain = "Người dân địa phương đã tham gia buổi lễ khá đông đủ hôm đó.";
        let factual = "Doanh thu của tập đoàn tăng 15% lên 2.500 tỷ đồng trong quý III.";
        assert!(
            score_sentence(factual, 4, 10, &VIETNAMESE) > score_sentence(plain, 4, 10, &VIETNAMESE)
        );
    }

    #[test]
    fn test_position_bonus_ordering() {
        let sentence = "The committee met for three hours to review the draft proposal.";
        let first = score_sentence(sentence, 0, 5, &ENGLISH);
        let second = score_sentence(sentence, 1, 5, &ENGLISH);
        let last = score_sentence(sentence, 4, 5, &ENGLISH);
        let middle = score_sentence(sentence, 2, 5, &ENGLISH);
        assert!(first > second);
        assert!(second > last);
        assert!(last > middle);
    }

    #[test]
    fn test_boilerplate_is_heavily_penalised() {
        let score = score_sentence("Xem thêm: Những tin tức nổi bật nhất trong ngày hôm nay", 0, 3, &VIETNAMESE);
        assert!(score < 0);
    }

    #[test]
    fn test_english_signals() {
        let sentence = "According to the central bank, inflation fell to 3.2 percent in the second quarter.";
        let score = score_sentence(sentence, 2, 6, &ENGLISH);
        assert!(score >= 10, "score was {score}");
    }

    #[test]
    fn test_rank_orders_by_score_then_index() {
        let mut scored = vec![
            ScoredSentence::new("a".into(), 1, 0),
            ScoredSentence::new("b".into(), 5, 1),
            ScoredSentence::new("c".into(), 5, 2),
        ];
        rank(&mut scored);
        let order: Vec<usize> = scored.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }
}
