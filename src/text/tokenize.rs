//! Message tokenization.
//!
//! Messages are split on the space character only. Punctuation stays
//! attached to its word and consecutive spaces produce empty tokens. A
//! single trailing delimiter ends the last token without opening a new one.

/// Token delimiter.
pub const DELIMITER: char = ' ';

/// Normalizes text for lexicon lookups (lowercase, preserves all characters).
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
}

/// Splits a message into tokens.
///
/// An empty message yields no tokens.
pub fn tokenize(message: &str) -> Vec<&str> {
    if message.is_empty() {
        return Vec::new();
    }
    let mut tokens: Vec<&str> = message.split(DELIMITER).collect();
    if tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens
}

/// A tokenized message with bounds-checked windows.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    /// Tokenizes an already normalized message.
    pub fn new(message: &'a str) -> Self {
        Self {
            tokens: tokenize(message),
        }
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the message had no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token at `index`.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    /// Returns `len` tokens starting at `start`, or `None` if the window
    /// runs past the end.
    pub fn window(&self, start: usize, len: usize) -> Option<&[&'a str]> {
        let end = start.checked_add(len)?;
        self.tokens.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("HoLa MuNdO"), "hola mundo");
        assert_eq!(normalize_text("ÁÉÍÓÚ"), "áéíóú");
    }

    #[test]
    fn test_tokenize_keeps_punctuation() {
        assert_eq!(tokenize("hi there, you!"), vec!["hi", "there,", "you!"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokens_empty_message() {
        let tokens = Tokens::new("");
        assert!(tokens.is_empty());
        assert_eq!(tokens.len(), 0);
        assert!(!Tokens::new(" ").is_empty());
    }

    #[test]
    fn test_tokenize_does_not_coalesce() {
        assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
        assert_eq!(tokenize(" a"), vec!["", "a"]);
    }

    #[test]
    fn test_tokenize_trailing_delimiter() {
        assert_eq!(tokenize("hi "), vec!["hi"]);
        assert_eq!(tokenize("hi  "), vec!["hi", ""]);
        assert_eq!(tokenize(" "), vec![""]);
    }

    #[test]
    fn test_tokenize_only_splits_on_space() {
        assert_eq!(tokenize("a\tb\nc"), vec!["a\tb\nc"]);
    }

    #[test]
    fn test_window_bounds() {
        let tokens = Tokens::new("oh my god");

        assert_eq!(tokens.window(0, 3), Some(&["oh", "my", "god"][..]));
        assert_eq!(tokens.window(1, 3), None);
        assert_eq!(tokens.window(usize::MAX, 3), None);
    }

    #[test]
    fn test_tokens_get() {
        let tokens = Tokens::new("a b");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.get(1), Some("b"));
        assert_eq!(tokens.get(2), None);
    }
}
