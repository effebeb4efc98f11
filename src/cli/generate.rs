use clap::Parser;
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Expand templates in place:\n    agentgen generate\n\n\
                   Write generated files elsewhere:\n    agentgen generate --output generated\n\n\
                   Restrict which files are templates:\n    agentgen generate --pattern 'agent-*.md'")]
pub struct GenerateArgs {
    /// Directory containing template files (defaults to <workspace>/templates)
    #[arg(long, short = 't', value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Base directory for generated files (defaults to the template directory)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Glob pattern a file name must match to be treated as a template
    #[arg(long, value_name = "GLOB", default_value = "*.md")]
    pub pattern: String,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_generate_defaults() {
        let cli = super::super::Cli::try_parse_from(["agentgen", "generate"]).unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            super::super::Commands::Generate(args) => {
                assert_eq!(args.templates, None);
                assert_eq!(args.output, None);
                assert_eq!(args.pattern, "*.md");
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_parsing_generate_with_options() {
        let cli = super::super::Cli::try_parse_from([
            "agentgen",
            "generate",
            "-t",
            "prompts",
            "-o",
            "out",
            "--pattern",
            "agent-*.md",
        ])
        .unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            super::super::Commands::Generate(args) => {
                assert_eq!(args.templates, Some(std::path::PathBuf::from("prompts")));
                assert_eq!(args.output, Some(std::path::PathBuf::from("out")));
                assert_eq!(args.pattern, "agent-*.md");
            }
            _ => panic!("Expected Generate command"),
        }
    }
}
