use crate::sentiment::Sentiment;

/// Errors surfaced at the string and file boundaries of the crate.
///
/// Analysis and sampling themselves never fail; these only come from parsing
/// categories, loading word banks, or reading settings.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SentiError {
    /// A category name outside positive/negative/neutral
    #[error("unknown sentiment category: {0:?}")]
    UnknownSentiment(String),
    /// Embedded lexicon file missing
    #[error("lexicon file not found: {0}")]
    LexiconFileNotFound(String),
    /// Lexicon file is not valid UTF-8
    #[error("lexicon file is not valid utf-8: {0}")]
    LexiconEncoding(String),
    /// Lexicon file failed to deserialize
    #[error("unable to parse lexicon file {file}: {source}")]
    LexiconParse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    /// Lexicon file declares a different category than its slot
    #[error("lexicon file {file} declares category {found}, expected {expected}")]
    CategoryMismatch {
        file: String,
        expected: Sentiment,
        found: Sentiment,
    },
    /// Word is empty or not already normalized
    #[error("invalid lexicon word {word:?} in {sentiment}: words must be lowercase alphanumeric")]
    InvalidWord { word: String, sentiment: Sentiment },
    /// Same word listed twice, in one category or across two
    #[error("word {word:?} appears in both {first} and {second}")]
    DuplicateWord {
        word: String,
        first: Sentiment,
        second: Sentiment,
    },
    /// A pool that must hold at least one entry is empty
    #[error("{sentiment} has an empty {pool} pool")]
    EmptyPool {
        sentiment: Sentiment,
        pool: &'static str,
    },
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Settings could not be (de)serialized
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SentiError>;
