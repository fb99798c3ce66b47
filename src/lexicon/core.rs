use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{Result, SentiError};
use crate::sentiment::Sentiment;
use crate::tokenizer::normalize;

static LEXICON_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lexicon/data");

static GLOBAL: OnceLock<Lexicon> = OnceLock::new();

/// On-disk shape of one category file.
#[derive(Deserialize, Clone, Debug)]
struct CategoryFile {
    name: Sentiment,
    emoji: String,
    message: String,
    words: Vec<String>,
    facts: Vec<String>,
    templates: Vec<String>,
}

/// Words and display metadata for one category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryEntry {
    pub sentiment: Sentiment,
    pub emoji: String,
    pub message: String,
    pub words: Vec<String>,
    pub facts: Vec<String>,
    /// Example sentence templates, `{}` marks a word slot
    pub templates: Vec<String>,
}

impl From<CategoryFile> for CategoryEntry {
    fn from(file: CategoryFile) -> Self {
        Self {
            sentiment: file.name,
            emoji: file.emoji,
            message: file.message,
            words: file.words,
            facts: file.facts,
            templates: file.templates,
        }
    }
}

/// Immutable word bank for all three categories.
///
/// Every word belongs to exactly one category and every category has at
/// least one fact and one template; construction fails otherwise.
#[derive(Clone, Debug)]
pub struct Lexicon {
    positive: CategoryEntry,
    negative: CategoryEntry,
    neutral: CategoryEntry,
    index: HashMap<String, Sentiment>,
}

impl Lexicon {
    /// Process-wide lexicon built from the embedded word files.
    pub fn global() -> &'static Lexicon {
        GLOBAL.get_or_init(|| Lexicon::embedded().expect("Embedded lexicon is invalid"))
    }

    /// Build the lexicon from the word files compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let positive = read_category_from_file(Sentiment::Positive)?;
        let negative = read_category_from_file(Sentiment::Negative)?;
        let neutral = read_category_from_file(Sentiment::Neutral)?;
        Self::from_entries(positive, negative, neutral)
    }

    pub fn from_entries(
        positive: CategoryEntry,
        negative: CategoryEntry,
        neutral: CategoryEntry,
    ) -> Result<Self> {
        let mut index = HashMap::new();

        for (expected, entry) in [
            (Sentiment::Positive, &positive),
            (Sentiment::Negative, &negative),
            (Sentiment::Neutral, &neutral),
        ] {
            if entry.sentiment != expected {
                return Err(SentiError::CategoryMismatch {
                    file: format!("{expected}.json"),
                    expected,
                    found: entry.sentiment,
                });
            }
            if entry.facts.is_empty() || entry.facts.iter().any(|f| f.trim().is_empty()) {
                return Err(SentiError::EmptyPool {
                    sentiment: expected,
                    pool: "facts",
                });
            }
            if entry.templates.is_empty() {
                return Err(SentiError::EmptyPool {
                    sentiment: expected,
                    pool: "templates",
                });
            }
            for word in &entry.words {
                if word.is_empty() || normalize(word) != *word {
                    return Err(SentiError::InvalidWord {
                        word: word.clone(),
                        sentiment: expected,
                    });
                }
                if let Some(first) = index.insert(word.clone(), expected) {
                    return Err(SentiError::DuplicateWord {
                        word: word.clone(),
                        first,
                        second: expected,
                    });
                }
            }
        }

        debug!(
            positive = positive.words.len(),
            negative = negative.words.len(),
            neutral = neutral.words.len(),
            "lexicon loaded"
        );

        Ok(Self {
            positive,
            negative,
            neutral,
            index,
        })
    }

    /// Swap in custom word lists, keeping the embedded emoji, messages,
    /// facts and templates.
    pub fn with_words(positive: &[&str], negative: &[&str], neutral: &[&str]) -> Result<Self> {
        let base = Lexicon::global();
        let replace = |sentiment: Sentiment, words: &[&str]| CategoryEntry {
            words: words.iter().map(|w| w.to_string()).collect(),
            ..base.entry(sentiment).clone()
        };
        Self::from_entries(
            replace(Sentiment::Positive, positive),
            replace(Sentiment::Negative, negative),
            replace(Sentiment::Neutral, neutral),
        )
    }

    pub fn entry(&self, sentiment: Sentiment) -> &CategoryEntry {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
            Sentiment::Neutral => &self.neutral,
        }
    }

    /// Category of an already normalized word, if it is in the lexicon.
    pub fn lookup(&self, normalized: &str) -> Option<Sentiment> {
        self.index.get(normalized).copied()
    }

    pub fn words(&self, sentiment: Sentiment) -> &[String] {
        &self.entry(sentiment).words
    }

    pub fn facts(&self, sentiment: Sentiment) -> &[String] {
        &self.entry(sentiment).facts
    }

    pub fn templates(&self, sentiment: Sentiment) -> &[String] {
        &self.entry(sentiment).templates
    }

    pub fn emoji(&self, sentiment: Sentiment) -> &str {
        &self.entry(sentiment).emoji
    }

    pub fn message(&self, sentiment: Sentiment) -> &str {
        &self.entry(sentiment).message
    }

    /// Total number of words across all categories
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn read_category_from_file(sentiment: Sentiment) -> Result<CategoryEntry> {
    let file_name = format!("{}.json", sentiment.as_str());
    let file = LEXICON_DIR
        .get_file(&file_name)
        .ok_or_else(|| SentiError::LexiconFileNotFound(file_name.clone()))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| SentiError::LexiconEncoding(file_name.clone()))?;

    let parse_error = |source: serde_json::Error| SentiError::LexiconParse {
        file: file_name.clone(),
        source,
    };
    let category: CategoryFile = from_str(file_as_str).map_err(parse_error)?;

    if category.name != sentiment {
        return Err(SentiError::CategoryMismatch {
            file: file_name,
            expected: sentiment,
            found: category.name,
        });
    }

    Ok(category.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_embedded_lexicon_is_valid() {
        let lexicon = Lexicon::embedded().expect("embedded lexicon should validate");

        for sentiment in Sentiment::ALL {
            assert!(!lexicon.words(sentiment).is_empty());
            assert!(!lexicon.facts(sentiment).is_empty());
            assert!(!lexicon.templates(sentiment).is_empty());
            assert!(!lexicon.emoji(sentiment).is_empty());
            assert!(!lexicon.message(sentiment).is_empty());
        }
    }

    #[test]
    fn test_lookup_known_words() {
        let lexicon = Lexicon::global();

        assert_eq!(lexicon.lookup("love"), Some(Sentiment::Positive));
        assert_eq!(lexicon.lookup("adore"), Some(Sentiment::Positive));
        assert_eq!(lexicon.lookup("hate"), Some(Sentiment::Negative));
        assert_eq!(lexicon.lookup("okay"), Some(Sentiment::Neutral));
        assert_eq!(lexicon.lookup("walked"), None);
        // Lookup expects normalized input
        assert_eq!(lexicon.lookup("Love"), None);
    }

    #[test]
    fn test_no_word_in_two_categories() {
        let lexicon = Lexicon::global();
        let total: usize = Sentiment::ALL.iter().map(|s| lexicon.words(*s).len()).sum();

        assert_eq!(total, lexicon.len());
    }

    #[test]
    fn test_read_category_from_file() {
        let entry = read_category_from_file(Sentiment::Negative).unwrap();

        assert_eq!(entry.sentiment, Sentiment::Negative);
        assert!(entry.words.contains(&"sad".to_string()));
    }

    #[test]
    fn test_with_words_keeps_metadata() {
        let lexicon = Lexicon::with_words(&["yay"], &["boo"], &["meh"]).unwrap();

        assert_eq!(lexicon.words(Sentiment::Positive), ["yay".to_string()]);
        assert_eq!(lexicon.lookup("boo"), Some(Sentiment::Negative));
        assert_eq!(
            lexicon.emoji(Sentiment::Neutral),
            Lexicon::global().emoji(Sentiment::Neutral)
        );
        assert_eq!(lexicon.len(), 3);
    }

    #[test]
    fn test_cross_category_duplicate_rejected() {
        let result = Lexicon::with_words(&["fine"], &["bad"], &["fine"]);

        assert_matches!(
            result,
            Err(SentiError::DuplicateWord {
                word,
                first: Sentiment::Positive,
                second: Sentiment::Neutral,
            }) if word == "fine"
        );
    }

    #[test]
    fn test_duplicate_within_category_rejected() {
        let result = Lexicon::with_words(&["yay", "yay"], &[], &[]);

        assert_matches!(result, Err(SentiError::DuplicateWord { .. }));
    }

    #[test]
    fn test_unnormalized_word_rejected() {
        assert_matches!(
            Lexicon::with_words(&["Happy"], &[], &[]),
            Err(SentiError::InvalidWord {
                sentiment: Sentiment::Positive,
                ..
            })
        );
        assert_matches!(
            Lexicon::with_words(&[], &["so-bad"], &[]),
            Err(SentiError::InvalidWord { .. })
        );
        assert_matches!(
            Lexicon::with_words(&[], &[], &[""]),
            Err(SentiError::InvalidWord { .. })
        );
    }

    #[test]
    fn test_empty_fact_pool_rejected() {
        let base = Lexicon::global();
        let mut neutral = base.entry(Sentiment::Neutral).clone();
        neutral.facts.clear();

        let result = Lexicon::from_entries(
            base.entry(Sentiment::Positive).clone(),
            base.entry(Sentiment::Negative).clone(),
            neutral,
        );

        assert_matches!(
            result,
            Err(SentiError::EmptyPool {
                sentiment: Sentiment::Neutral,
                pool: "facts",
            })
        );
    }

    #[test]
    fn test_empty_template_pool_rejected() {
        let base = Lexicon::global();
        let mut positive = base.entry(Sentiment::Positive).clone();
        positive.templates.clear();

        let result = Lexicon::from_entries(
            positive,
            base.entry(Sentiment::Negative).clone(),
            base.entry(Sentiment::Neutral).clone(),
        );

        assert_matches!(
            result,
            Err(SentiError::EmptyPool {
                sentiment: Sentiment::Positive,
                pool: "templates",
            })
        );
    }

    #[test]
    fn test_misplaced_entry_rejected() {
        let base = Lexicon::global();

        let result = Lexicon::from_entries(
            base.entry(Sentiment::Negative).clone(),
            base.entry(Sentiment::Negative).clone(),
            base.entry(Sentiment::Neutral).clone(),
        );

        assert_matches!(
            result,
            Err(SentiError::CategoryMismatch {
                expected: Sentiment::Positive,
                found: Sentiment::Negative,
                ..
            })
        );
    }

    #[test]
    fn test_category_file_deserialization() {
        let json_data = r#"
        {
            "name": "positive",
            "emoji": "😊",
            "message": "happy",
            "words": ["yay", "woo"],
            "facts": ["fact"],
            "templates": ["I feel {}"]
        }
        "#;

        let file: CategoryFile = from_str(json_data).expect("Failed to deserialize test category");
        let entry = CategoryEntry::from(file);

        assert_eq!(entry.sentiment, Sentiment::Positive);
        assert_eq!(entry.words.len(), 2);
        assert_eq!(entry.templates, vec!["I feel {}".to_string()]);
    }

    #[test]
    fn test_category_file_with_unknown_name_fails() {
        let json_data = r#"
        {"name": "joyful", "emoji": "", "message": "", "words": [], "facts": [], "templates": []}
        "#;

        assert!(from_str::<CategoryFile>(json_data).is_err());
    }
}
