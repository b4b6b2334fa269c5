//! Application run modes: logger init and command dispatch.

use std::error::Error;
use std::io;

use clap::CommandFactory;

use crate::cli::{self, Args, Commands};
use model_catalog::core::{app, cli as commands, config};

/// Initialize env_logger on stderr. `RUST_LOG` overrides the -v/-q level.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Run the selected command. No subcommand lists models.
pub fn run_command(command: Option<Commands>) -> Result<(), Box<dyn Error>> {
    match command {
        Some(Commands::Config) => commands::run_config(),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, app::NAME, &mut io::stdout());
            Ok(())
        }
        command => {
            // Catalog problems are fatal at startup.
            let config = config::load()?;
            match command {
                Some(Commands::Models { query, json }) => {
                    commands::run_models(&config, query.as_deref(), json)
                }
                Some(Commands::Default { json }) => commands::run_default(&config, json),
                Some(Commands::Show { name, json }) => commands::run_show(&config, &name, json),
                _ => commands::run_models(&config, None, false),
            }
        }
    }
}
