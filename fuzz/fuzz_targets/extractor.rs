#![no_main]

use libfuzzer_sys::fuzz_target;
use scraper::Html;

use newsbrief::extractor::extract;
use newsbrief::summarizer::{create_bullet_point_summary, extract_and_summarize_content};

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);
    let document = Html::parse_document(&html);

    // Neither extraction nor summarization may panic on any input.
    let content = extract(&document);
    let percent = data.first().map(|b| u32::from(*b)).unwrap_or(50);
    let output = extract_and_summarize_content(&document, percent);
    assert!(output.stats.summarized_paragraph_count <= output.stats.original_paragraph_count);

    let bullets = create_bullet_point_summary(&content.full_content, None, None);
    assert!(bullets.text.chars().count() <= 400);
});
