//! Lexicon command - show the built-in substitution tables.

use anyhow::{Context, Result};
use clap::Args;

use aoler::Lexicon;

use super::CommandExecutor;

/// Print the phrase, word and variant tables.
#[derive(Args, Debug)]
pub struct LexiconCommand {
    /// Only check the table invariants
    #[arg(long)]
    pub check: bool,
}

impl CommandExecutor for LexiconCommand {
    fn execute(&self) -> Result<()> {
        let lexicon = Lexicon::shared();

        if self.check {
            lexicon.validate().context("Lexicon check failed")?;
            println!(
                "Lexicon OK: {} phrases, {} words, {} variant sets",
                lexicon.phrase_count(),
                lexicon.word_count(),
                lexicon.variant_count()
            );
            return Ok(());
        }

        println!("Phrases ({}):", lexicon.phrase_count());
        for (phrase, replacement) in lexicon.phrases() {
            println!("  {:<16} -> {}", phrase, replacement);
        }

        println!();
        println!("Words ({}):", lexicon.word_count());
        for (word, replacement) in lexicon.words() {
            println!("  {:<16} -> {}", word, replacement);
        }

        println!();
        println!("Variants ({}):", lexicon.variant_count());
        for (word, variants) in lexicon.variants() {
            println!("  {:<16} -> {}", word, variants.join(" | "));
        }

        Ok(())
    }
}
