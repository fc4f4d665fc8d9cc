//! Filter command - behave like the chat server hook.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use aoler::{AolerConfig, ChatFilter};

use super::{dice_for, for_each_stdin_line, CommandExecutor};

/// Pass stdin chat lines through the gated filter.
///
/// Each line is rewritten with the configured probability (65% by default)
/// and printed unchanged otherwise.
#[derive(Args, Debug)]
pub struct FilterCommand {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the gate percentage (0-100)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub percent: Option<u8>,

    /// Override the text seed
    #[arg(short, long)]
    pub seed: Option<String>,
}

impl CommandExecutor for FilterCommand {
    fn execute(&self) -> Result<()> {
        let config = self.resolve_config()?;
        debug!(?config, "filter config");

        let filter = ChatFilter::from_config(&config).context("Invalid filter config")?;
        debug!(percent = filter.gate().percent(), "filter gate ready");
        let mut dice = dice_for(config.seed.as_deref());

        for_each_stdin_line(|line| match filter.on_raw_chat(line, &mut dice) {
            Some(replacement) => println!("{}", replacement),
            None => println!("{}", line),
        })
    }
}

impl FilterCommand {
    /// Loads the config file (if any) and applies command-line overrides.
    fn resolve_config(&self) -> Result<AolerConfig> {
        let mut config = match &self.config {
            Some(path) => AolerConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => AolerConfig::default(),
        };

        if let Some(percent) = self.percent {
            config.gate_percent = percent;
        }
        if let Some(seed) = &self.seed {
            config.seed = Some(seed.clone());
        }

        Ok(config)
    }
}
