pub mod core;

// Re-export the main types for convenience
pub use core::{CategoryEntry, Lexicon};
