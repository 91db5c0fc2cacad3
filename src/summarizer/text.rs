/// Appended wherever text is cut short.
pub const ELLIPSIS: char = '…';

// Cut points tried from the end of the window backwards. Conjunction cuts drop
// the conjunction itself; punctuation cuts drop the mark.
const BREAKPOINTS: [&str; 10] = [
    "; ", ", ", " và ", " hoặc ", " nhưng ", " and ", " or ", " but ", ": ", " - ",
];

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `limit` characters (ellipsis included), preferring a
/// natural break in the second half of the window, then a word boundary, and
/// only then a hard cut. Text already within the limit is returned unchanged.
pub fn truncate_at_break(text: &str, limit: usize) -> String {
    let text = text.trim();
    if char_len(text) <= limit {
        return text.to_string();
    }
    if limit == 0 {
        return String::new();
    }

    let window = prefix_chars(text, limit - 1);
    let min_keep = limit / 2;

    let natural = BREAKPOINTS
        .iter()
        .filter_map(|bp| window.rfind(bp))
        .filter(|&pos| char_len(&window[..pos]) >= min_keep)
        .max();
    if let Some(pos) = natural {
        return with_ellipsis(&window[..pos]);
    }

    if let Some(pos) = window.rfind(char::is_whitespace)
        && char_len(&window[..pos]) >= min_keep
    {
        return with_ellipsis(&window[..pos]);
    }

    with_ellipsis(window)
}

/// Cuts at the natural break closest to `target` characters. Returns `None`
/// when the text has no usable break, so callers can keep the original
/// instead of chopping a word.
pub fn truncate_near(text: &str, target: usize) -> Option<String> {
    let total = char_len(text);
    let lower = 40.min(total / 2);
    let upper = total.saturating_sub(20);

    let mut best: Option<(usize, usize)> = None;
    for bp in [", ", "; "] {
        for (byte_pos, _) in text.match_indices(bp) {
            let pos = char_len(&text[..byte_pos]);
            if pos < lower || pos > upper {
                continue;
            }
            let distance = pos.abs_diff(target);
            // Ties go to the earlier break.
            let better = match best {
                None => true,
                Some((best_byte, best_distance)) => {
                    distance < best_distance || (distance == best_distance && byte_pos < best_byte)
                }
            };
            if better {
                best = Some((byte_pos, distance));
            }
        }
    }

    best.map(|(byte_pos, _)| with_ellipsis(&text[..byte_pos]))
}

fn prefix_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((byte_pos, _)) => &text[..byte_pos],
        None => text,
    }
}

fn with_ellipsis(text: &str) -> String {
    let trimmed = text.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '-'));
    format!("{trimmed}{ELLIPSIS}")
}
