//! Summarizes a saved HTML page without touching the network.
//!
//! Usage: `digest <file.html> [percent]`

use anyhow::{Context, Result, bail};
use scraper::Html;
use serde_json::json;

use newsbrief::extractor::language::needs_translation;
use newsbrief::summarizer::Summarizer;

const DEFAULT_PERCENT: u32 = 50;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: digest <file.html> [percent]");
    };
    let percent = match args.next() {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("percent must be a number, got {raw:?}"))?,
        None => DEFAULT_PERCENT,
    };

    let html = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let document = Html::parse_document(&html);

    let summarizer = Summarizer::default();
    let metadata = summarizer.extractor().metadata(&document);
    let output = summarizer.extract_and_summarize(&document, percent);

    let report = json!({
        "title": metadata.title,
        "siteName": metadata.site_name,
        "needsTranslation": needs_translation(&output.full_content),
        "result": output,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
