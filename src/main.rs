//! Aoler - chat lines, the way they were typed in 1999
//!
//! A CLI for rewriting chat lines into misspelled internet slang, either
//! unconditionally or through the same gate a chat server hook would use.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CommandExecutor, FilterCommand, LexiconCommand, TransformCommand};

/// Aoler - chat lines, the way they were typed in 1999
///
/// Rewrites text with acronyms, homophones, phonetic misspellings and
/// random OMG/ROFL/LOL!!!1 embellishments.
#[derive(Parser)]
#[command(name = "aoler")]
#[command(version)]
#[command(about = "Rewrite chat lines into deliberately misspelled internet slang")]
#[command(long_about = None)]
struct Cli {
    /// Verbose logging (debug level, overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a message (or every stdin line)
    Transform(TransformCommand),

    /// Rewrite a share of stdin chat lines, like a chat server hook
    Filter(FilterCommand),

    /// Show or check the built-in substitution tables
    Lexicon(LexiconCommand),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Transform(cmd) => cmd.execute(),
        Commands::Filter(cmd) => cmd.execute(),
        Commands::Lexicon(cmd) => cmd.execute(),
    }
}
