//! Phonetic mutation of words with no dictionary entry.
//!
//! Each character is checked against an ordered rule ladder and only the
//! first matching rule fires. Rules may consume up to three characters of
//! lookahead; consumed characters are skipped rather than reprocessed.
//!
//! | Rule | Pattern          | Output           | Skip |
//! |------|------------------|------------------|------|
//! | 1    | `xx`             | `x`              | 1    |
//! | 2    | `be`             | `b`              | 1    |
//! | 3    | `ck`             | `k`              | 1    |
//! | 4    | `e`              | `3`, `a` or `e`  | 0    |
//! | 5a   | `ing`            | `ng`             | 2    |
//! | 5b   | `i?e`            | `ie?`            | 2    |
//! | 5c   | `ie`             | `ei`             | 1    |
//! | 6a   | `am`             | `m`              | 1    |
//! | 6b   | `alk`            | `ok`             | 2    |
//! | 6c   | `ai?`            | `a?e`            | 2    |
//! | 6d   | `ater`           | `8r`             | 3    |
//! | 6e   | `a?e`            | `ae?`            | 2    |
//! | 7a   | `oo`             | `u`              | 1    |
//! | 7b   | `o`              | `0`, `ooo`, `o`  | 0    |
//! | 8    | punctuation      | nothing          | 0    |

use crate::dice::{choose, Dice};

/// Characters removed from mutated words.
pub const DROPPED: &[char] = &['.', '!', '?', '\'', ';', ',', ':', '"', '`', '~'];

const E_SPELLINGS: &[char] = &['3', 'a', 'e'];
const O_SPELLINGS: &[&str] = &["0", "ooo", "o"];

/// Bounds-checked view of the characters after the cursor.
#[derive(Debug, Clone, Copy)]
pub struct Lookahead<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Lookahead<'a> {
    /// Cursor at `pos` within `chars`.
    pub fn new(chars: &'a [char], pos: usize) -> Self {
        Self { chars, pos }
    }

    /// Character `k` positions after the cursor.
    pub fn peek(&self, k: usize) -> Option<char> {
        self.pos
            .checked_add(k)
            .and_then(|i| self.chars.get(i))
            .copied()
    }

    /// True if the characters right after the cursor spell `pattern`.
    pub fn followed_by(&self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(i, expected)| self.peek(i + 1) == Some(expected))
    }
}

/// Returns true for characters the mutator drops.
pub fn is_dropped(c: char) -> bool {
    DROPPED.contains(&c)
}

/// Mutates a single word, appending the result to `out`.
pub fn mutate_into<D: Dice + ?Sized>(word: &str, dice: &mut D, out: &mut String) {
    let chars: Vec<char> = word.chars().collect();
    let mut skip = 0;

    for (pos, &c) in chars.iter().enumerate() {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        skip = apply_rules(c, Lookahead::new(&chars, pos), dice, out);
    }
}

/// Mutates a single word.
pub fn mutate<D: Dice + ?Sized>(word: &str, dice: &mut D) -> String {
    let mut out = String::with_capacity(word.len());
    mutate_into(word, dice, &mut out);
    out
}

/// Applies the first matching rule and returns how many characters to skip.
fn apply_rules<D: Dice + ?Sized>(
    c: char,
    ahead: Lookahead<'_>,
    dice: &mut D,
    out: &mut String,
) -> usize {
    let next = ahead.peek(1);
    let after_next = ahead.peek(2);

    if next == Some(c) {
        push_plain(c, out);
        return 1;
    }

    match c {
        'b' if next == Some('e') => {
            out.push('b');
            1
        }
        'c' if next == Some('k') => {
            out.push('k');
            1
        }
        'e' => {
            out.push(choose(dice, E_SPELLINGS).copied().unwrap_or('e'));
            0
        }
        'i' => match (next, after_next) {
            _ if ahead.followed_by("ng") => {
                out.push_str("ng");
                2
            }
            (Some(middle), Some('e')) => {
                out.push_str("ie");
                push_plain(middle, out);
                2
            }
            (Some('e'), _) => {
                out.push_str("ei");
                1
            }
            _ => {
                out.push('i');
                0
            }
        },
        'a' => match (next, after_next) {
            (Some('m'), _) => {
                out.push('m');
                1
            }
            _ if ahead.followed_by("lk") => {
                out.push_str("ok");
                2
            }
            (Some('i'), Some(third)) => {
                out.push('a');
                push_plain(third, out);
                out.push('e');
                2
            }
            _ if ahead.followed_by("ter") => {
                out.push_str("8r");
                3
            }
            (Some(middle), Some('e')) => {
                out.push_str("ae");
                push_plain(middle, out);
                2
            }
            _ => {
                out.push('a');
                0
            }
        },
        'o' if next == Some('o') => {
            out.push('u');
            1
        }
        'o' => {
            out.push_str(choose(dice, O_SPELLINGS).copied().unwrap_or("o"));
            0
        }
        _ => {
            push_plain(c, out);
            0
        }
    }
}

/// Emits a character unchanged unless it is dropped punctuation.
fn push_plain(c: char, out: &mut String) {
    if !is_dropped(c) {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{FirstChoice, SeededDice};

    fn first(word: &str) -> String {
        mutate(word, &mut FirstChoice)
    }

    #[test]
    fn test_lookahead_peek_bounds() {
        let chars: Vec<char> = "abc".chars().collect();
        let ahead = Lookahead::new(&chars, 1);

        assert_eq!(ahead.peek(1), Some('c'));
        assert_eq!(ahead.peek(2), None);
        assert_eq!(ahead.peek(usize::MAX), None);
    }

    #[test]
    fn test_lookahead_followed_by() {
        let chars: Vec<char> = "walk".chars().collect();
        let ahead = Lookahead::new(&chars, 1);

        assert!(ahead.followed_by("lk"));
        assert!(!ahead.followed_by("lkz"));
        assert!(ahead.followed_by(""));
    }

    #[test]
    fn test_doubled_letter_collapses() {
        assert_eq!(first("ll"), "l");
        assert_eq!(first("grr"), "gr");
        // Three in a row: the first two collapse, the third stands alone
        assert_eq!(first("zzz"), "zz");
    }

    #[test]
    fn test_doubled_punctuation_is_still_dropped() {
        assert_eq!(first("..."), "");
        assert_eq!(first("hm!!"), "hm");
    }

    #[test]
    fn test_be_and_ck() {
        assert_eq!(first("bed"), "bd");
        assert_eq!(first("tick"), "tik");
    }

    #[test]
    fn test_e_first_choice() {
        assert_eq!(first("e"), "3");
    }

    #[test]
    fn test_e_spellings_all_legal() {
        let mut dice = SeededDice::from_text_seed("e-spellings");
        let mut seen = std::collections::HashSet::new();

        for _ in 0..300 {
            let out = mutate("e", &mut dice);
            assert!(["3", "a", "e"].contains(&out.as_str()), "unexpected {out}");
            seen.insert(out);
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_i_rules() {
        assert_eq!(first("sing"), "sng");
        assert_eq!(first("like"), "liek");
        assert_eq!(first("pie"), "pei");
        assert_eq!(first("it"), "it");
    }

    #[test]
    fn test_a_rules() {
        assert_eq!(first("game"), "gm3");
        assert_eq!(first("talk"), "tok");
        assert_eq!(first("rain"), "rane");
        assert_eq!(first("later"), "l8r");
        assert_eq!(first("date"), "daet");
        assert_eq!(first("cat"), "cat");
    }

    #[test]
    fn test_a_rule_c_needs_two_ahead() {
        // "ai" at the end of a word has no third character to move
        assert_eq!(first("hai"), "hai");
    }

    #[test]
    fn test_o_rules() {
        assert_eq!(first("lol"), "l0l");
        // Rule 1 already collapses "oo" before the o-specific rule is reached
        assert_eq!(first("cool"), "col");
    }

    #[test]
    fn test_o_spellings_all_legal() {
        let mut dice = SeededDice::from_text_seed("o-spellings");
        let mut seen = std::collections::HashSet::new();

        for _ in 0..300 {
            let out = mutate("o", &mut dice);
            assert!(["0", "ooo", "o"].contains(&out.as_str()), "unexpected {out}");
            seen.insert(out);
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_window_punctuation_is_dropped() {
        // 6c moves the character after "ai", 5b and 6e move the middle one
        assert_eq!(first("thai."), "thae");
        assert_eq!(first("chai,"), "chae");
        assert_eq!(first("sai:d"), "saed");
        assert_eq!(first("i'e"), "ie");
        assert_eq!(first("a;e"), "ae");
        assert_eq!(first("a~e"), "ae");
    }

    #[test]
    fn test_window_letters_still_move() {
        assert_eq!(first("aix"), "axe");
        assert_eq!(first("ixe"), "iex");
    }

    #[test]
    fn test_punctuation_dropped() {
        assert_eq!(first("h.m!?';,:\"`~"), "hm");
    }

    #[test]
    fn test_single_char_tokens() {
        assert_eq!(first("a"), "a");
        assert_eq!(first("i"), "i");
        assert_eq!(first("x"), "x");
        assert_eq!(first("!"), "");
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(first(""), "");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(first("ñu"), "ñu");
        assert_eq!(first("日本"), "日本");
    }
}
