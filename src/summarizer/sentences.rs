/// Buffers at or below this many characters are treated as abbreviations or
/// fragments and keep accumulating instead of being emitted.
pub const MIN_SENTENCE_CHARS: usize = 10;

const TERMINALS: [char; 4] = ['.', '!', '?', '…'];
const CLOSERS: [char; 7] = ['"', '\'', '”', '’', ')', ']', '»'];

/// Splits text into sentence-like units.
///
/// A `.` between two digits (`1.000`, `3.5`) never ends a sentence. Other
/// terminal marks end one when followed by end of input, whitespace, or an
/// uppercase letter. Closing quotes and brackets directly after the mark stay
/// with the sentence they close. Text without terminal punctuation comes back
/// as a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if !TERMINALS.contains(&ch) {
            i += 1;
            continue;
        }

        if ch == '.' && is_numeric_separator(&chars, i) {
            i += 1;
            continue;
        }

        // Absorb "?!", "..." and closing quotes/brackets into this sentence.
        while let Some(&next) = chars.get(i + 1) {
            if TERMINALS.contains(&next) || CLOSERS.contains(&next) {
                current.push(next);
                i += 1;
            } else {
                break;
            }
        }

        if starts_new_sentence(&chars, i) {
            let trimmed = current.trim();
            if trimmed.chars().count() > MIN_SENTENCE_CHARS {
                sentences.push(trimmed.to_string());
                current.clear();
            }
        }
        i += 1;
    }

    let rest = current.trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

fn is_numeric_separator(chars: &[char], i: usize) -> bool {
    let before = i.checked_sub(1).and_then(|p| chars.get(p));
    let after = chars.get(i + 1);
    matches!((before, after), (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit())
}

fn starts_new_sentence(chars: &[char], mark: usize) -> bool {
    match chars.get(mark + 1) {
        None => true,
        Some(next) if next.is_whitespace() => true,
        Some(next) if next.is_uppercase() => true,
        Some(_) => chars.get(mark + 2).is_some_and(|c| c.is_uppercase()),
    }
}
