use crate::summarizer::lexicon::{Lexicon, is_boilerplate};
use crate::summarizer::model::{BulletSet, ScoredSentence, SummaryConfig};
use crate::summarizer::scorer::{rank, score_sentences};
use crate::summarizer::sentences::split_sentences;
use crate::summarizer::text::{char_len, truncate_at_break};

const DUPLICATE_PREFIX_CHARS: usize = 30;

/// Builds at most `max_bullets` marker-prefixed bullets whose combined length,
/// newline separators included, never exceeds `max_total_length`.
///
/// Sentences are taken by score, skipping near-duplicates of chosen ones and
/// their neighbours unless they score exceptionally, then the remaining slots
/// are backfilled in reading order. Output is in reading order. Non-empty
/// text always yields at least one bullet as long as the budget can hold the
/// marker plus one character.
pub fn create_bullets(
    text: &str,
    max_bullets: usize,
    max_total_length: usize,
    config: &SummaryConfig,
    lexicon: &Lexicon,
) -> BulletSet {
    let text = text.trim();
    if text.is_empty() || max_bullets == 0 {
        return BulletSet::default();
    }

    let sentences = split_sentences(text);
    let scored = score_sentences(&sentences, lexicon);
    let eligible: Vec<&ScoredSentence> = scored
        .iter()
        .filter(|s| {
            s.length >= config.min_sentence_length
                && s.length <= config.max_sentence_length
                && !is_boilerplate(&s.sentence)
        })
        .collect();

    let mut ranked: Vec<ScoredSentence> = eligible
        .iter()
        .filter(|s| s.score > 0)
        .map(|s| (*s).clone())
        .collect();
    rank(&mut ranked);

    let mut picker = Picker::new(max_bullets, max_total_length, config);

    for candidate in &ranked {
        if picker.is_full() {
            break;
        }
        let adjacent = picker
            .picked
            .iter()
            .any(|(index, _)| index.abs_diff(candidate.index) <= 1);
        if (adjacent && candidate.score <= config.adjacency_override_score)
            || picker.is_near_duplicate(&candidate.sentence)
        {
            continue;
        }
        if !picker.try_add(candidate.index, &candidate.sentence) {
            break;
        }
    }

    if picker.picked.is_empty()
        && let Some(first) = sentences.first()
    {
        picker.add_fallback(first);
    }

    if !picker.picked.is_empty() {
        for candidate in &eligible {
            if picker.is_full() {
                break;
            }
            if picker.contains(candidate.index) || picker.is_near_duplicate(&candidate.sentence) {
                continue;
            }
            if !picker.try_add(candidate.index, &candidate.sentence) {
                break;
            }
        }
    }

    picker.finish()
}

struct Picker<'a> {
    picked: Vec<(usize, String)>,
    used: usize,
    max_bullets: usize,
    max_total_length: usize,
    config: &'a SummaryConfig,
}

impl<'a> Picker<'a> {
    fn new(max_bullets: usize, max_total_length: usize, config: &'a SummaryConfig) -> Self {
        Self {
            picked: Vec::new(),
            used: 0,
            max_bullets,
            max_total_length,
            config,
        }
    }

    fn is_full(&self) -> bool {
        self.picked.len() >= self.max_bullets
    }

    fn contains(&self, index: usize) -> bool {
        self.picked.iter().any(|(i, _)| *i == index)
    }

    // Characters one more bullet may use: separator and marker come first.
    fn room(&self) -> usize {
        let separator = usize::from(!self.picked.is_empty());
        let marker = char_len(&self.config.bullet_marker);
        self.max_total_length
            .saturating_sub(self.used + separator + marker)
            .min(self.config.max_bullet_length)
    }

    /// Adds the sentence, cut to the remaining room. Returns false when the
    /// budget cannot hold a bullet of minimum length anymore.
    fn try_add(&mut self, index: usize, sentence: &str) -> bool {
        let room = self.room();
        if room < self.config.min_sentence_length {
            return false;
        }
        let body = truncate_at_break(sentence, room);
        if char_len(&body) < self.config.min_sentence_length {
            return true;
        }
        self.push(index, body);
        true
    }

    fn add_fallback(&mut self, sentence: &str) {
        let body = truncate_at_break(sentence, self.room());
        if !body.is_empty() {
            self.push(0, body);
        }
    }

    fn push(&mut self, index: usize, body: String) {
        let separator = usize::from(!self.picked.is_empty());
        self.used += separator + char_len(&self.config.bullet_marker) + char_len(&body);
        self.picked.push((index, body));
    }

    fn is_near_duplicate(&self, sentence: &str) -> bool {
        let candidate = sentence.to_lowercase();
        let candidate_prefix = prefix(&candidate);
        self.picked.iter().any(|(_, body)| {
            let body = body.to_lowercase();
            body.contains(candidate_prefix) || candidate.contains(prefix(&body))
        })
    }

    fn finish(mut self) -> BulletSet {
        self.picked.sort_by_key(|(index, _)| *index);
        let marker = &self.config.bullet_marker;
        BulletSet::new(
            self.picked
                .into_iter()
                .map(|(_, body)| format!("{marker}{body}"))
                .collect(),
        )
    }
}

fn prefix(text: &str) -> &str {
    match text.char_indices().nth(DUPLICATE_PREFIX_CHARS) {
        Some((pos, _)) => &text[..pos],
        None => text,
    }
}
