/// A whitespace-delimited word, kept both as typed and in matchable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token exactly as it appeared in the input
    pub surface: &'a str,
    /// Lowercased with every non-alphanumeric character removed
    pub normalized: String,
}

/// Lowercase a word and drop everything that isn't a letter or digit.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split text on whitespace into match candidates.
///
/// Tokens that normalize to nothing (pure punctuation, emoji) are dropped.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .filter_map(|surface| {
            let normalized = normalize(surface);
            (!normalized.is_empty()).then_some(Token {
                surface,
                normalized,
            })
        })
        .collect()
}
