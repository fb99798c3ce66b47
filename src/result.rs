use serde::{Deserialize, Serialize};

use crate::classifier::Classification;
use crate::lexicon::Lexicon;
use crate::sentiment::Sentiment;

/// What callers get back from an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Integer percentage in `[0, 100]`
    pub confidence: u8,
    /// Number of matched words for the winning category
    pub score: usize,
    /// Matched words as typed, in order, duplicates kept
    pub matched_words: Vec<String>,
    pub emoji: String,
    pub message: String,
}

impl SentimentResult {
    /// Attach the winning category's emoji and message.
    pub fn build(lexicon: &Lexicon, classification: &Classification<'_>, confidence: u8) -> Self {
        let sentiment = classification.winner;
        Self {
            sentiment,
            confidence,
            score: classification.score(),
            matched_words: classification
                .matched_words
                .iter()
                .map(|w| w.to_string())
                .collect(),
            emoji: lexicon.emoji(sentiment).to_string(),
            message: lexicon.message(sentiment).to_string(),
        }
    }

    /// "Found 2 positive words" style summary line.
    pub fn summary(&self) -> String {
        let plural = if self.score == 1 { "" } else { "s" };
        format!("Found {} {} word{}", self.score, self.sentiment, plural)
    }
}
