//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod filter;
mod lexicon;
mod transform;

pub use filter::FilterCommand;
pub use lexicon::LexiconCommand;
pub use transform::TransformCommand;

use std::io::{self, BufRead};

use anyhow::{Context, Result};

use aoler::SeededDice;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Seeded dice when a seed is given, entropy otherwise.
fn dice_for(seed: Option<&str>) -> SeededDice {
    match seed {
        Some(seed) => SeededDice::from_text_seed(seed),
        None => SeededDice::from_entropy(),
    }
}

/// Calls `handle` for every line on stdin.
fn for_each_stdin_line(mut handle: impl FnMut(&str)) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read line from stdin")?;
        handle(&line);
    }
    Ok(())
}
