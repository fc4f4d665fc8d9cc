//! Trailing embellishments.
//!
//! After the words are rewritten, a line may pick up emotive suffixes and a
//! run of excited punctuation.

use crate::dice::{choose, Dice};

/// Emotive suffixes, each appended independently in this order.
pub const SUFFIXES: &[&str] = &["OMG", "ROFL", "LOL"];

/// Probability (percent) of each suffix.
pub const SUFFIX_CHANCE: u8 = 50;

/// Probability (percent) of a punctuation run without a trigger character.
pub const RUN_CHANCE: u8 = 33;

/// Shortest punctuation run.
pub const RUN_MIN: usize = 3;

/// Longest punctuation run.
pub const RUN_MAX: usize = 12;

const EXCLAIM_RUN: &[char] = &['!', '1'];
const QUESTION_RUN: &[char] = &['?', '!'];

/// Appends suffixes and at most one punctuation run to `out`.
///
/// `message` is the original (lowercased) line and decides which run is
/// forced: a `!` forces the `!`/`1` run, otherwise a `?` forces the `?`/`!`
/// run. Each run can also fire on its own with [`RUN_CHANCE`].
pub fn embellish<D: Dice + ?Sized>(message: &str, dice: &mut D, out: &mut String) {
    for suffix in SUFFIXES {
        if dice.chance(SUFFIX_CHANCE) {
            out.push_str(suffix);
        }
    }

    if message.contains('!') || dice.chance(RUN_CHANCE) {
        push_run(EXCLAIM_RUN, dice, out);
    } else if message.contains('?') || dice.chance(RUN_CHANCE) {
        push_run(QUESTION_RUN, dice, out);
    }
}

fn push_run<D: Dice + ?Sized>(alphabet: &[char], dice: &mut D, out: &mut String) {
    let len = dice.between(RUN_MIN, RUN_MAX);
    for _ in 0..len {
        if let Some(&c) = choose(dice, alphabet) {
            out.push(c);
        }
    }
}
