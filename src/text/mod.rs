//! Text processing for chat line rewriting.
//!
//! This module provides:
//! - Space-only tokenization with bounds-checked windows
//! - Phrase, word and variant resolution against the lexicon
//! - Per-character phonetic mutation
//! - Trailing suffixes and punctuation runs

pub mod embellish;
pub mod phonetic;
pub mod substitute;
pub mod tokenize;

pub use embellish::embellish;
pub use phonetic::{mutate, Lookahead};
pub use substitute::{match_phrase, resolve, substitute_word, Resolution};
pub use tokenize::{normalize_text, tokenize, Tokens};
