use clap::{Parser, Subcommand};
use itertools::Itertools;
use senti::{
    sampling, Analyzer, FileSettingsStore, Lexicon, Sentiment, SentimentResult, SettingsStore,
    WordMark,
};
use std::{
    error::Error,
    io::{self, IsTerminal, Read},
    path::PathBuf,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// find the feelings hidden in words
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Senti counts happy, sad and ordinary words to guess how a sentence feels, and shows which words gave it away."
)]
pub struct Cli {
    /// settings file to use instead of the default location
    #[clap(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// analyze how a sentence feels (reads stdin when no text is given)
    Analyze {
        text: Vec<String>,

        /// print the result as json
        #[clap(long)]
        json: bool,
    },
    /// pick random words from one feeling category
    Words {
        #[clap(value_enum)]
        sentiment: Sentiment,

        /// number of words to draw (defaults to the configured sample count)
        #[clap(short = 'n', long)]
        count: Option<usize>,
    },
    /// tell a fun fact about one feeling category
    Fact {
        #[clap(value_enum)]
        sentiment: Sentiment,
    },
    /// make up an example sentence for one feeling category
    Example {
        #[clap(value_enum)]
        sentiment: Sentiment,
    },
    /// mark the feeling words in a sentence (reads stdin when no text is given)
    Highlight {
        text: Vec<String>,

        /// print the marks as json
        #[clap(long)]
        json: bool,
    },
    /// show the settings, saving any values given as flags first
    Config {
        /// confidence when no positive or negative word matched
        #[clap(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        baseline: Option<u8>,

        /// lowest confidence once a positive or negative word matched
        #[clap(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        floor: Option<u8>,

        /// number of words `words` draws when no count is given
        #[clap(long)]
        sample_count: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let store = match &cli.config {
        Some(path) => FileSettingsStore::with_path(path),
        None => FileSettingsStore::new(),
    };
    let settings = store.load();
    debug!(path = %store.path().display(), ?settings, "settings loaded");

    let analyzer = Analyzer::new(Lexicon::global(), settings);
    let mut rng = rand::thread_rng();

    match cli.command {
        Command::Analyze { text, json } => {
            let text = read_text(text)?;
            let result = analyzer.analyze(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
        }
        Command::Words { sentiment, count } => {
            let count = count.unwrap_or(analyzer.settings().sample_count);
            for word in sampling::sample_words_with(analyzer.lexicon(), sentiment, count, &mut rng)
            {
                println!("{word}");
            }
        }
        Command::Fact { sentiment } => {
            println!(
                "{}",
                sampling::fun_fact_with(analyzer.lexicon(), sentiment, &mut rng)
            );
        }
        Command::Example { sentiment } => {
            println!(
                "{}",
                sampling::example_sentence_with(analyzer.lexicon(), sentiment, &mut rng)
            );
        }
        Command::Highlight { text, json } => {
            let text = read_text(text)?;
            let marks = analyzer.highlight(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&marks)?);
            } else {
                println!("{}", render_marks(&marks));
            }
        }
        Command::Config {
            baseline,
            floor,
            sample_count,
        } => {
            let mut settings = analyzer.settings().clone();
            if baseline.is_some() || floor.is_some() || sample_count.is_some() {
                settings.baseline_confidence = baseline.unwrap_or(settings.baseline_confidence);
                settings.confidence_floor = floor.unwrap_or(settings.confidence_floor);
                settings.sample_count = sample_count.unwrap_or(settings.sample_count);
                store.save(&settings)?;
                debug!(path = %store.path().display(), ?settings, "settings saved");
            }
            println!("settings file: {}", store.path().display());
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}

/// Join words given on the command line, or fall back to piped stdin.
fn read_text(words: Vec<String>) -> io::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf)
}

fn print_result(result: &SentimentResult) {
    println!("{} {}", result.emoji, result.sentiment);
    println!("{}", result.message);
    println!("confidence: {}%", result.confidence);
    if !result.matched_words.is_empty() {
        println!(
            "words that gave it away: {}",
            result.matched_words.iter().join(", ")
        );
    }
    println!("{}", result.summary());
}

/// Wrap feeling words as `[word:positive]`, leave the rest alone.
fn render_marks(marks: &[WordMark]) -> String {
    marks
        .iter()
        .map(|mark| match mark.sentiment {
            Some(sentiment) => format!("[{}:{}]", mark.word, sentiment),
            None => mark.word.clone(),
        })
        .join(" ")
}
