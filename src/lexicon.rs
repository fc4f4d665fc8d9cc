//! Substitution tables.
//!
//! Three read-only tables drive the dictionary part of the rewrite:
//! - phrases: three lowercase words joined by single spaces, one replacement
//! - words: one lowercase word, one replacement
//! - variants: one lowercase word, several alternative spellings
//!
//! All keys are lowercase. Callers lowercase their input before querying.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::AolerError;

/// Number of words in every phrase key.
pub const PHRASE_WORDS: usize = 3;

const PHRASES: &[(&str, &str)] = &[
    ("what the fuck", "wtf"),
    ("what the hell", "wth"),
    ("what the heck", "wth"),
    ("oh my god", "omg"),
    ("be right back", "brb"),
];

const WORDS: &[(&str, &str)] = &[
    ("your", "ur"),
    ("you", "u"),
    ("what", "wut"),
    ("are", "r"),
    ("why", "y"),
    ("because", "b/c"),
    ("oh", "o"),
    ("my", "mah"),
    ("new", "nu"),
    ("with", "wit"),
    ("really", "rilly"),
    ("please", "plz"),
    ("thanks", "thx"),
    ("ok", "k"),
    ("okay", "k"),
    ("library", "liberry"),
    ("be", "b"),
    ("schoool", "skool"),
    ("hi", "hai"),
    ("noob", "newb"),
    ("hack", "h4x"),
    ("lag", "h4x"),
    ("cheat", "chiet"),
    ("that", "taht"),
    ("people", "ppl"),
    ("sorry", "sowwy"),
];

const VARIANTS: &[(&str, &[&str])] = &[
    ("to", &["two", "too", "2"]),
    ("two", &["to", "too", "2"]),
    ("too", &["to", "two", "2"]),
    ("the", &["teh", "da"]),
    ("their", &["there", "they're"]),
    ("there", &["their", "they're"]),
    ("they're", &["their", "there"]),
];

static SHARED: OnceLock<Lexicon> = OnceLock::new();

/// The combined phrase, word and variant tables.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    phrases: BTreeMap<String, String>,
    words: BTreeMap<String, String>,
    variants: BTreeMap<String, Vec<String>>,
}

impl Lexicon {
    /// Builds the built-in tables.
    pub fn builtin() -> Self {
        let mut lexicon = Self::default();

        for (key, value) in PHRASES {
            lexicon.phrases.insert(key.to_string(), value.to_string());
        }
        for (key, value) in WORDS {
            lexicon.words.insert(key.to_string(), value.to_string());
        }
        for (key, values) in VARIANTS {
            lexicon.variants.insert(
                key.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            );
        }

        lexicon
    }

    /// Process-wide built-in lexicon, built on first use.
    pub fn shared() -> &'static Lexicon {
        SHARED.get_or_init(Self::builtin)
    }

    /// Looks up a three-word phrase key.
    pub fn lookup_phrase(&self, phrase: &str) -> Option<&str> {
        self.phrases.get(phrase).map(String::as_str)
    }

    /// Looks up a single-word substitution.
    pub fn lookup_word(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Looks up the alternative spellings for a word.
    pub fn lookup_variants(&self, word: &str) -> Option<&[String]> {
        self.variants.get(word).map(Vec::as_slice)
    }

    /// Number of phrase entries.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Number of single-word entries.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of variant sets.
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Phrase entries in key order.
    pub fn phrases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.phrases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Word entries in key order.
    pub fn words(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Variant sets in key order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.variants.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Checks the table invariants.
    ///
    /// Phrase keys must be exactly three lowercase words separated by single
    /// spaces. Word and variant keys must be single lowercase words. Variant
    /// sets must be non-empty and must not contain their own key.
    pub fn validate(&self) -> Result<(), AolerError> {
        for key in self.phrases.keys() {
            let words: Vec<&str> = key.split(' ').collect();
            if words.len() != PHRASE_WORDS || words.iter().any(|w| w.is_empty()) {
                return Err(invalid(key, "phrase key must be three space-separated words"));
            }
            check_lowercase(key)?;
        }

        for key in self.words.keys() {
            check_single_word(key)?;
        }

        for (key, values) in &self.variants {
            check_single_word(key)?;
            if values.is_empty() {
                return Err(invalid(key, "variant set is empty"));
            }
            if values.iter().any(|v| v == key) {
                return Err(invalid(key, "variant set contains its own key"));
            }
        }

        Ok(())
    }
}

fn check_single_word(key: &str) -> Result<(), AolerError> {
    if key.is_empty() || key.contains(' ') {
        return Err(invalid(key, "key must be a single word"));
    }
    check_lowercase(key)
}

fn check_lowercase(key: &str) -> Result<(), AolerError> {
    if key.to_lowercase() != key {
        return Err(invalid(key, "key must be lowercase"));
    }
    Ok(())
}

fn invalid(key: &str, reason: &'static str) -> AolerError {
    AolerError::InvalidLexiconEntry {
        key: key.to_string(),
        reason,
    }
}
