//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  model-catalog                     List models in the active catalog
  model-catalog models --query mini Filter models by name or title
  model-catalog default             Show the default model
  model-catalog show gpt-4.1 --json Show one model as JSON
  model-catalog config              Show config path, catalog source, and selected model
  model-catalog completions bash    Generate bash completions

ENVIRONMENT:
  MODEL_CATALOG_FILE    Catalog JSON file to use instead of the built-in table
  MODEL_CATALOG_MODEL   Selected model (defaults to the first catalog entry)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Inspect the model catalog and its default model",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List models in declaration order (the first one is the default)
    Models {
        /// Filter models by name or title
        #[arg(long)]
        query: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the default model
    Default {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a model by name
    Show {
        /// Model name (e.g. gpt-4.1)
        name: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show config path, catalog source, and selected model
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
