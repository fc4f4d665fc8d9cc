//! Dictionary resolution of tokens.
//!
//! Phrase windows are tried first, then single-word substitutions, then
//! variant sets. Tokens with no entry fall through to the phonetic mutator.

use crate::dice::{choose, Dice};
use crate::lexicon::{Lexicon, PHRASE_WORDS};

use super::phonetic;
use super::tokenize::Tokens;

/// How a token was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'l> {
    /// A three-token phrase matched; the following two tokens are consumed.
    Phrase(&'l str),
    /// Exact single-word substitution.
    Word(&'l str),
    /// One member of a variant set.
    Variant(&'l str),
    /// No dictionary entry; the token was phonetically mutated.
    Mutated(String),
}

impl Resolution<'_> {
    /// The text emitted for this resolution.
    pub fn as_str(&self) -> &str {
        match self {
            Resolution::Phrase(s) | Resolution::Word(s) | Resolution::Variant(s) => *s,
            Resolution::Mutated(s) => s.as_str(),
        }
    }

    /// Number of tokens this resolution consumed.
    pub fn consumed(&self) -> usize {
        match self {
            Resolution::Phrase(_) => PHRASE_WORDS,
            _ => 1,
        }
    }
}

/// Tries the three-token window starting at `index` against the phrase table.
pub fn match_phrase<'l>(lexicon: &'l Lexicon, tokens: &Tokens<'_>, index: usize) -> Option<&'l str> {
    let window = tokens.window(index, PHRASE_WORDS)?;
    lexicon.lookup_phrase(&window.join(" "))
}

/// Resolves one token through the word and variant tables.
///
/// Returns `None` when neither table has an entry.
pub fn substitute_word<'l, D: Dice + ?Sized>(
    lexicon: &'l Lexicon,
    word: &str,
    dice: &mut D,
) -> Option<Resolution<'l>> {
    if let Some(value) = lexicon.lookup_word(word) {
        return Some(Resolution::Word(value));
    }

    lexicon
        .lookup_variants(word)
        .and_then(|variants| choose(dice, variants))
        .map(|v| Resolution::Variant(v.as_str()))
}

/// Resolves the token at `index`: phrase, word, variant, then mutation.
///
/// `index` must be in bounds.
pub fn resolve<'l, D: Dice + ?Sized>(
    lexicon: &'l Lexicon,
    tokens: &Tokens<'_>,
    index: usize,
    dice: &mut D,
) -> Resolution<'l> {
    if let Some(phrase) = match_phrase(lexicon, tokens, index) {
        return Resolution::Phrase(phrase);
    }

    let word = tokens.get(index).unwrap_or_default();
    substitute_word(lexicon, word, dice)
        .unwrap_or_else(|| Resolution::Mutated(phonetic::mutate(word, dice)))
}
