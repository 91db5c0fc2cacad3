pub mod api;
pub mod app_state;
pub mod cache;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod summarizer;

pub use summarizer::{Summarizer, create_bullet_point_summary, extract_and_summarize_content};
