use whatlang::{Lang, detect};

use crate::summarizer::lexicon::Language;

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

/// ISO 639-1 code of the text's language, when detection is confident.
pub fn detect_language(text: &str) -> Option<String> {
    if text.trim().chars().count() < MIN_TEXT_LENGTH {
        return None;
    }

    let info = detect(text)?;
    if info.confidence() < MIN_CONFIDENCE {
        return None;
    }
    Some(lang_to_code(info.lang()).to_string())
}

/// Lexicon to score with. Anything not detected as English uses Vietnamese.
pub fn scoring_language(text: &str) -> Language {
    Language::from_code(detect_language(text).as_deref())
}

/// Whether a translation step would be needed before presenting the text to
/// a Vietnamese reader. Undetectable text is left alone.
pub fn needs_translation(text: &str) -> bool {
    matches!(detect_language(text), Some(code) if code != "vi")
}

fn lang_to_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Vie => "vi",
        Lang::Eng => "en",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Tha => "th",
        Lang::Khm => "km",
        Lang::Ind => "id",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Rus => "ru",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Ita => "it",
        other => other.code(),
    }
}
