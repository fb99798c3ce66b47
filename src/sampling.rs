use rand::seq::SliceRandom;
use rand::Rng;

use crate::lexicon::Lexicon;
use crate::sentiment::Sentiment;

/// Slot marker inside example sentence templates
pub const WORD_SLOT: &str = "{}";

/// Draw up to `count` distinct words of one category in random order.
///
/// Asking for more words than the category holds returns all of them.
pub fn sample_words(sentiment: Sentiment, count: usize) -> Vec<String> {
    sample_words_with(Lexicon::global(), sentiment, count, &mut rand::thread_rng())
}

pub fn sample_words_with<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    sentiment: Sentiment,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut words = lexicon.words(sentiment).to_vec();
    words.shuffle(rng);
    words.truncate(count);
    words
}

/// A random fun fact about one category.
pub fn fun_fact(sentiment: Sentiment) -> &'static str {
    fun_fact_with(Lexicon::global(), sentiment, &mut rand::thread_rng())
}

pub fn fun_fact_with<'a, R: Rng + ?Sized>(
    lexicon: &'a Lexicon,
    sentiment: Sentiment,
    rng: &mut R,
) -> &'a str {
    // Fact pools are validated non-empty when the lexicon is built
    let facts = lexicon.facts(sentiment);
    &facts[rng.gen_range(0..facts.len())]
}

/// A practice sentence built from a random template and random words of
/// the same category.
pub fn example_sentence(sentiment: Sentiment) -> String {
    example_sentence_with(Lexicon::global(), sentiment, &mut rand::thread_rng())
}

pub fn example_sentence_with<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    sentiment: Sentiment,
    rng: &mut R,
) -> String {
    let templates = lexicon.templates(sentiment);
    let template = &templates[rng.gen_range(0..templates.len())];
    let slots = template.matches(WORD_SLOT).count();
    let words = sample_words_with(lexicon, sentiment, slots, rng);
    fill_template(template, &words)
}

/// Replace each slot with the next word, cycling when words run short.
fn fill_template(template: &str, words: &[String]) -> String {
    let mut pieces = template.split(WORD_SLOT);
    let mut out = pieces.next().unwrap_or_default().to_string();
    let mut fillers = words.iter().cycle();

    for piece in pieces {
        if let Some(word) = fillers.next() {
            out.push_str(word);
        }
        out.push_str(piece);
    }
    out
}
