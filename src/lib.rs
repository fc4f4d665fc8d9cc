//! # Aoler - chat lines, the way they were typed in 1999
//!
//! Aoler rewrites a line of chat into deliberately misspelled internet slang.
//!
//! ## Overview
//!
//! Each line goes through a fixed pipeline:
//! - The line is **lowercased** and split on spaces
//! - Three-word **phrases** collapse into acronyms ("oh my god" -> "omg")
//! - Known **words** are swapped ("please" -> "plz")
//! - Homophones pick a random **variant** ("to" -> "two", "too" or "2")
//! - Everything else is **mutated** letter by letter ("later" -> "l8r")
//! - Random **OMG/ROFL/LOL** suffixes and `!!!1!` runs are appended
//! - The result is **uppercased**
//!
//! Randomness is always injected through [`Dice`], so output is reproducible
//! with a seeded generator and fully predictable with [`FirstChoice`].
//!
//! ## Example Usage
//!
//! ```rust
//! use aoler::{FirstChoice, Lexicon, SeededDice, Transformer};
//!
//! let transformer = Transformer::new(Lexicon::shared());
//!
//! // FirstChoice switches every embellishment off
//! assert_eq!(transformer.transform("please your", &mut FirstChoice), "PLZ UR ");
//!
//! // Seeded dice give the same rendering every time
//! let a = transformer.transform("what the hell", &mut SeededDice::from_text_seed("x"));
//! let b = transformer.transform("what the hell", &mut SeededDice::from_text_seed("x"));
//! assert_eq!(a, b);
//! ```
//!
//! ## Modules
//!
//! - [`lexicon`]: Phrase, word and variant tables
//! - [`text`]: Tokenization, substitution, phonetic mutation, embellishment
//! - [`transform`]: The line rewriting pipeline
//! - [`filter`]: Gate for chat server integration
//! - [`dice`]: Randomness providers

pub mod config;
pub mod dice;
pub mod error;
pub mod filter;
pub mod lexicon;
pub mod text;
pub mod transform;

// Re-export commonly used types at the crate root
pub use config::AolerConfig;
pub use dice::{Dice, FirstChoice, RngDice, SeededDice};
pub use error::AolerError;
pub use filter::{ChatFilter, InvocationGate};
pub use lexicon::Lexicon;
pub use transform::{transform, transform_with_dice, Transformer};
