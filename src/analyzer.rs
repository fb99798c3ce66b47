use serde::Serialize;

use crate::classifier::{classify, confidence};
use crate::config::Settings;
use crate::lexicon::Lexicon;
use crate::result::SentimentResult;
use crate::sentiment::Sentiment;
use crate::tokenizer::{normalize, tokenize};

/// One word of a sentence, marked when it carries a feeling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMark {
    pub word: String,
    /// Positive or negative when the word is a feeling word
    pub sentiment: Option<Sentiment>,
}

/// A lexicon paired with scoring settings.
///
/// Holds only shared references, so one analyzer can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Analyzer<'a> {
    lexicon: &'a Lexicon,
    settings: Settings,
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new(Lexicon::global(), Settings::default())
    }
}

impl<'a> Analyzer<'a> {
    pub fn new(lexicon: &'a Lexicon, settings: Settings) -> Self {
        Self {
            lexicon,
            settings: settings.clamped(),
        }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Classify free text. Never fails; unmatched text is neutral.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let tokens = tokenize(text);
        let classification = classify(self.lexicon, &tokens);
        let confidence = confidence(
            &classification.counts,
            classification.winner,
            &self.settings,
        );
        SentimentResult::build(self.lexicon, &classification, confidence)
    }

    /// Category of a single word, ignoring case and punctuation.
    pub fn word_sentiment(&self, word: &str) -> Option<Sentiment> {
        self.lexicon.lookup(&normalize(word))
    }

    /// Mark every whitespace-separated word that shows a feeling.
    pub fn highlight(&self, text: &str) -> Vec<WordMark> {
        text.split_whitespace()
            .map(|word| WordMark {
                word: word.to_string(),
                sentiment: self.word_sentiment(word).filter(Sentiment::is_feeling),
            })
            .collect()
    }
}
