//! Shields separators inside numeric literals (`1.234.567`, `2,5`) while text
//! goes through sentence splitting and truncation, so neither can cut a
//! number apart.

const DOT_PLACEHOLDER: char = '\u{E000}';
const COMMA_PLACEHOLDER: char = '\u{E001}';

/// Replaces every `.` and `,` that sits between two ASCII digits with a
/// private-use placeholder. [`restore_numbers`] reverses it exactly.
pub fn protect_numbers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        let between_digits = i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|c| c.is_ascii_digit());
        match ch {
            '.' if between_digits => out.push(DOT_PLACEHOLDER),
            ',' if between_digits => out.push(COMMA_PLACEHOLDER),
            _ => out.push(ch),
        }
    }
    out
}

pub fn restore_numbers(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            DOT_PLACEHOLDER => '.',
            COMMA_PLACEHOLDER => ',',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protects_grouped_thousands() {
        let protected = protect_numbers("Doanh thu đạt 1.234.567 đồng.");
        assert!(!protected.contains("1.234"));
        assert!(protected.ends_with("đồng."));
        assert_eq!(restore_numbers(&protected), "Doanh thu đạt 1.234.567 đồng.");
    }

    #[test]
    fn test_protects_decimal_comma() {
        let protected = protect_numbers("Tăng 2,5%, cao nhất từ 1.2.2020");
        assert_eq!(protected.matches(',').count(), 1);
        assert_eq!(restore_numbers(&protected), "Tăng 2,5%, cao nhất từ 1.2.2020");
    }

    #[test]
    fn test_leaves_sentence_punctuation_alone() {
        let text = "Năm 2024. Tháng 5, giá tăng.";
        assert_eq!(protect_numbers(text), text);
    }
}
