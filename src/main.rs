//! Agentgen - template expander for AI agent Markdown files
//!
//! Reads Markdown templates carrying YAML frontmatter, substitutes
//! `{{variable}}` placeholders in the body from the header's `metadata` and
//! `output` blocks, and writes the result to the path declared in
//! `output.file_name`.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod progress;
mod template;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
