//! Line rewriting.
//!
//! This module orchestrates the rewrite of one chat line:
//! 1. Lowercase the line
//! 2. Split it on spaces
//! 3. Resolve each token (phrase, word, variant, phonetic mutation)
//! 4. Append each resolution followed by a single space
//! 5. Append suffixes and punctuation runs
//! 6. Uppercase the result

use tracing::{debug, trace};

use crate::dice::{Dice, SeededDice};
use crate::lexicon::Lexicon;
use crate::text::embellish::embellish;
use crate::text::substitute::resolve;
use crate::text::tokenize::{normalize_text, Tokens};

/// Separator appended after every resolved token.
pub const SEPARATOR: char = ' ';

/// Rewrites lines using a borrowed lexicon.
#[derive(Debug, Clone, Copy)]
pub struct Transformer<'l> {
    lexicon: &'l Lexicon,
}

impl Default for Transformer<'static> {
    fn default() -> Self {
        Self::new(Lexicon::shared())
    }
}

impl<'l> Transformer<'l> {
    /// Creates a transformer over `lexicon`.
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    /// Rewrites one line, drawing every random decision from `dice`.
    pub fn transform<D: Dice + ?Sized>(&self, message: &str, dice: &mut D) -> String {
        let normalized = normalize_text(message);
        let tokens = Tokens::new(&normalized);
        let mut out = String::with_capacity(normalized.len() * 2);

        let mut index = 0;
        while index < tokens.len() {
            let resolution = resolve(self.lexicon, &tokens, index, dice);
            trace!(index, ?resolution, "resolved token");

            out.push_str(resolution.as_str());
            out.push(SEPARATOR);
            index += resolution.consumed();
        }

        embellish(&normalized, dice, &mut out);

        let result = out.to_uppercase();
        debug!(
            tokens = tokens.len(),
            input_len = message.len(),
            output_len = result.len(),
            "transformed line"
        );
        result
    }
}

/// Rewrites a line with the built-in lexicon and fresh entropy.
pub fn transform(message: &str) -> String {
    transform_with_dice(message, &mut SeededDice::from_entropy())
}

/// Rewrites a line with the built-in lexicon and the given dice.
pub fn transform_with_dice<D: Dice + ?Sized>(message: &str, dice: &mut D) -> String {
    Transformer::default().transform(message, dice)
}
