use crate::summarizer::lexicon::is_boilerplate;

pub const MIN_PARAGRAPH_CHARS: usize = 20;
const MIN_LETTER_RATIO: f64 = 0.5;

/// Whether a candidate paragraph is real article text: long enough, not
/// boilerplate, and mostly letters rather than timestamps or counters.
pub fn is_valid_paragraph(text: &str) -> bool {
    let text = text.trim();
    let length = text.chars().count();
    if length < MIN_PARAGRAPH_CHARS {
        return false;
    }
    if is_boilerplate(text) {
        return false;
    }

    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    letters as f64 / length as f64 >= MIN_LETTER_RATIO
}

/// True when `candidate` equals, contains, or is contained in any existing
/// paragraph.
pub fn overlaps(existing: &[String], candidate: &str) -> bool {
    existing
        .iter()
        .any(|paragraph| paragraph.contains(candidate) || candidate.contains(paragraph.as_str()))
}

/// Appends `candidate` unless it overlaps an existing paragraph. Returns
/// whether it was added.
pub fn push_unique(paragraphs: &mut Vec<String>, candidate: String) -> bool {
    if candidate.is_empty() || overlaps(paragraphs, &candidate) {
        return false;
    }
    paragraphs.push(candidate);
    true
}
