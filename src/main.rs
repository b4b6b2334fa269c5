//! # model-catalog CLI
//!
//! Lists the models in the active catalog, shows the default model, and
//! reports which catalog file and model the environment selects.
//!
//! ## Features
//! - Built-in OpenAI catalog, validated at build time
//! - User catalog override via `MODEL_CATALOG_FILE` or the config directory
//! - Text or JSON output
//! - Shell completions

mod cli;
mod run;

use clap::Parser;
use dotenv::dotenv;

use crate::cli::Args;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    if let Err(e) = run::run_command(args.command) {
        log::debug!("Command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
