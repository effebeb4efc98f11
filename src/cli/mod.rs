//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod generate;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;

/// Agentgen - template expander for AI agent Markdown files
#[derive(Parser, Debug)]
#[command(
    name = "agentgen",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Template expander for AI agent Markdown files",
    long_about = "Agentgen reads Markdown templates whose YAML frontmatter declares an \
                  output file name and substitution variables, replaces {{variable}} \
                  placeholders in the body, and writes the generated documents to the \
                  declared paths.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  agentgen generate                      \x1b[90m# Expand ./templates in place\x1b[0m\n   \
                  agentgen generate -t prompts -o out   \x1b[90m# Separate template and output dirs\x1b[0m\n   \
                  agentgen generate --pattern 'agent-*.md' \x1b[90m# Only matching templates\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "AGENTGEN_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand template files into generated documents
    Generate(GenerateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
