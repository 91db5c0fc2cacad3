//! Language-tagged keyword tables consumed by the sentence scorer and the
//! boilerplate filters. The scoring logic never names a word itself.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vi,
    En,
}

impl Language {
    /// Maps an ISO 639-1 code onto a scoring language. Anything other than
    /// English is scored with the Vietnamese tables.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("en") => Language::En,
            _ => Language::Vi,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
        }
    }
}

#[derive(Debug)]
pub struct Lexicon {
    pub language: Language,
    pub currency: &'static [&'static str],
    pub percent: &'static [&'static str],
    pub trend: &'static [&'static str],
    pub period: &'static [&'static str],
    pub attribution: &'static [&'static str],
    pub purpose: &'static [&'static str],
    pub importance: &'static [&'static str],
    /// Phrases that mark a sentence or paragraph as boilerplate when it starts
    /// with them.
    pub boilerplate_prefixes: &'static [&'static str],
    /// Phrases that mark boilerplate wherever they appear.
    pub boilerplate_anywhere: &'static [&'static str],
}

pub static VIETNAMESE: Lexicon = Lexicon {
    language: Language::Vi,
    currency: &[
        "triệu", "tỷ", "nghìn tỷ", "ngàn", "đồng", "vnđ", "vnd", "usd", "đô la", "euro",
    ],
    percent: &["phần trăm", "điểm phần trăm"],
    trend: &[
        "tăng", "giảm", "tăng trưởng", "sụt giảm", "lao dốc", "phục hồi", "vượt", "đạt",
        "kỷ lục", "cao nhất", "thấp nhất",
    ],
    period: &["quý", "tháng", "năm", "tuần", "hôm nay", "hôm qua", "sáng nay", "chiều nay"],
    attribution: &[
        "theo", "cho biết", "cho hay", "khẳng định", "nhấn mạnh", "phát biểu", "thông báo",
        "công bố", "tuyên bố", "chia sẻ với",
    ],
    purpose: &["nhằm", "để", "với mục tiêu", "nhằm mục đích"],
    importance: &[
        "chính phủ", "quốc hội", "thủ tướng", "bộ trưởng", "ngân hàng", "doanh nghiệp",
        "thị trường", "kinh tế", "đầu tư", "chính sách", "dự án", "quyết định", "lần đầu",
        "quan trọng", "chính thức", "nghị định", "luật",
    ],
    boilerplate_prefixes: &[
        "xem thêm", "đọc thêm", "chia sẻ", "bình luận", "theo dõi", "click", "nhấn vào",
        "bấm vào", "tin liên quan", "quảng cáo", "ảnh:", "video:", "nguồn:",
    ],
    boilerplate_anywhere: &[
        "xem thêm:", "đọc thêm:", "nhấn vào đây", "bấm vào đây", "click vào đây",
        "đăng ký nhận tin", "tải ứng dụng",
    ],
};

pub static ENGLISH: Lexicon = Lexicon {
    language: Language::En,
    currency: &[
        "million", "billion", "trillion", "usd", "dollars", "euros", "pounds", "vnd", "yen",
    ],
    percent: &["percent", "per cent", "percentage points"],
    trend: &[
        "increase", "increased", "decrease", "decreased", "rise", "rose", "fall", "fell",
        "grow", "grew", "growth", "decline", "declined", "surge", "surged", "drop", "dropped",
        "record", "highest", "lowest",
    ],
    period: &[
        "quarter", "q1", "q2", "q3", "q4", "january", "february", "march", "april", "may",
        "june", "july", "august", "september", "october", "november", "december", "monday",
        "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "yesterday", "today",
    ],
    attribution: &[
        "according to", "said", "says", "told", "announced", "reported", "stated", "confirmed",
    ],
    purpose: &["in order to", "so that", "aimed at", "to", "for"],
    importance: &[
        "government", "president", "minister", "parliament", "congress", "central bank",
        "company", "market", "economy", "investment", "policy", "decision", "first time",
        "official", "officially", "law", "agreement",
    ],
    boilerplate_prefixes: &[
        "read more", "see more", "see also", "share", "comments", "follow us", "follow", "click",
        "tap", "subscribe", "related", "advertisement", "photo:", "video:", "source:",
    ],
    boilerplate_anywhere: &[
        "click here", "tap here", "sign up for our newsletter", "share this article",
        "all rights reserved",
    ],
};

pub fn for_language(language: Language) -> &'static Lexicon {
    match language {
        Language::Vi => &VIETNAMESE,
        Language::En => &ENGLISH,
    }
}

/// True when `text` looks like navigation, sharing or promo chrome in any of
/// the known languages. Pages mix languages in their chrome, so every table
/// is consulted.
pub fn is_boilerplate(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    let head = lower.trim_start_matches(|c: char| !c.is_alphanumeric());

    [&VIETNAMESE, &ENGLISH].iter().any(|lexicon| {
        lexicon
            .boilerplate_prefixes
            .iter()
            .any(|prefix| starts_with_phrase(head, prefix))
            || lexicon
                .boilerplate_anywhere
                .iter()
                .any(|phrase| count_phrase(&lower, phrase) > 0)
    })
}

/// Counts occurrences of `phrase` in `haystack` that are not glued to
/// neighbouring letters or digits. Both sides are expected lowercase.
pub fn count_phrase(haystack: &str, phrase: &str) -> usize {
    haystack
        .match_indices(phrase)
        .filter(|(pos, _)| {
            let before = haystack[..*pos].chars().next_back();
            let after = haystack[pos + phrase.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
        .count()
}

pub fn contains_any(haystack: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| count_phrase(haystack, phrase) > 0)
}

fn starts_with_phrase(text: &str, phrase: &str) -> bool {
    text.starts_with(phrase)
        && !text[phrase.len()..]
            .chars()
            .next()
            .is_some_and(char::is_alphanumeric)
}
