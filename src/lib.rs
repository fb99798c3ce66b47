// Library surface for the CLI, integration tests and any UI that wants
// word-feeling analysis in process.
pub mod analyzer;
pub mod app_dirs;
pub mod classifier;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod result;
pub mod sampling;
pub mod sentiment;
pub mod tokenizer;

pub use analyzer::{Analyzer, WordMark};
pub use config::{FileSettingsStore, Settings, SettingsStore};
pub use error::{Result, SentiError};
pub use lexicon::Lexicon;
pub use result::SentimentResult;
pub use sentiment::Sentiment;

/// Classify text with the embedded lexicon and default settings.
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    Analyzer::default().analyze(text)
}

/// Up to `count` distinct random words from one category.
pub fn get_random_words(sentiment: Sentiment, count: usize) -> Vec<String> {
    sampling::sample_words(sentiment, count)
}

/// A random fun fact about one category.
pub fn get_fun_fact(sentiment: Sentiment) -> &'static str {
    sampling::fun_fact(sentiment)
}
