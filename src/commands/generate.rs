//! Generate command implementation
//!
//! Resolves the run configuration, expands every template in the template
//! directory, and reports a summary of the batch.

use console::Style;

use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::template::pipeline;

/// Run generate command
pub fn run(workspace: Option<PathBuf>, args: GenerateArgs) -> Result<()> {
    let config = GeneratorConfig::from_args(workspace, &args)?;

    println!(
        "{} {}",
        Style::new().bold().apply_to("Template directory:"),
        config.template_dir.display()
    );
    println!(
        "{} {}",
        Style::new().bold().apply_to("Output directory:"),
        config.output_dir.display()
    );
    println!();

    let summary = pipeline::run_batch(&config)?;

    if summary.discovered > 0 {
        println!();
        println!(
            "Generated {} of {} template(s)",
            summary.created, summary.discovered
        );
    }

    Ok(())
}
