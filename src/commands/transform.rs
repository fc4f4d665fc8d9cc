//! Transform command - rewrite messages unconditionally.

use anyhow::Result;
use clap::Args;
use tracing::info;

use aoler::{Lexicon, Transformer};

use super::{dice_for, for_each_stdin_line, CommandExecutor};

/// Rewrite a message (or every stdin line) into slang.
#[derive(Args, Debug)]
pub struct TransformCommand {
    /// Message to rewrite (reads lines from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Text seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Renderings to print per message (1-50)
    #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=50))]
    pub count: u8,
}

impl CommandExecutor for TransformCommand {
    fn execute(&self) -> Result<()> {
        let transformer = Transformer::new(Lexicon::shared());
        let mut dice = dice_for(self.seed.as_deref());

        let mut render = |line: &str| {
            for _ in 0..self.count {
                println!("{}", transformer.transform(line, &mut dice));
            }
        };

        match &self.message {
            Some(message) => render(message.as_str()),
            None => {
                info!("reading messages from stdin");
                for_each_stdin_line(render)?;
            }
        }

        Ok(())
    }
}
