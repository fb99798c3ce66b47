use tracing::debug;

use crate::config::Settings;
use crate::lexicon::Lexicon;
use crate::sentiment::Sentiment;
use crate::tokenizer::Token;

/// Per-category match counts for one piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl Counts {
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    fn bump(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    /// Positive plus negative matches. Neutral words are not signal.
    pub fn total_signal(&self) -> usize {
        self.positive + self.negative
    }

    /// Category with the strictly highest count, neutral otherwise.
    ///
    /// Equal positive and negative counts cancel out, no matches at all
    /// means neutral, and neutral words can win outright by count.
    pub fn winner(&self) -> Sentiment {
        let Counts {
            positive,
            negative,
            neutral,
        } = *self;

        if positive > negative && positive > neutral {
            Sentiment::Positive
        } else if negative > positive && negative > neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Outcome of scanning tokens against the lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub winner: Sentiment,
    pub counts: Counts,
    /// Surface forms that matched the winning category, in input order
    pub matched_words: Vec<&'a str>,
}

impl Classification<'_> {
    pub fn score(&self) -> usize {
        self.counts.get(self.winner)
    }
}

pub fn classify<'a>(lexicon: &Lexicon, tokens: &[Token<'a>]) -> Classification<'a> {
    let mut counts = Counts::default();
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    let mut neutral = Vec::new();

    for token in tokens {
        if let Some(sentiment) = lexicon.lookup(&token.normalized) {
            counts.bump(sentiment);
            match sentiment {
                Sentiment::Positive => positive.push(token.surface),
                Sentiment::Negative => negative.push(token.surface),
                Sentiment::Neutral => neutral.push(token.surface),
            }
        }
    }

    let winner = counts.winner();
    debug!(
        positive = counts.positive,
        negative = counts.negative,
        neutral = counts.neutral,
        %winner,
        "classified tokens"
    );

    let matched_words = match winner {
        Sentiment::Positive => positive,
        Sentiment::Negative => negative,
        Sentiment::Neutral => neutral,
    };

    Classification {
        winner,
        counts,
        matched_words,
    }
}

/// Integer confidence in `[0, 100]`.
///
/// With no positive or negative matches this is the baseline. Otherwise it
/// is the winner's share of the positive+negative signal, never below the
/// configured floor.
pub fn confidence(counts: &Counts, winner: Sentiment, settings: &Settings) -> u8 {
    let total = counts.total_signal();
    if total == 0 {
        return settings.baseline_confidence.min(100);
    }

    let ratio = counts.get(winner) as f64 / total as f64;
    let percent = (ratio * 100.0).round().min(100.0) as u8;
    percent.max(settings.confidence_floor).min(100)
}
