//! Per-file processing and batch orchestration.
//!
//! Each template runs read → parse → resolve → render → write on its own;
//! an unusable or failing file is logged and skipped so the rest of the
//! batch still completes. Only an unlistable template directory aborts the
//! run.

use std::path::{Path, PathBuf};

use console::Style;
use serde_yaml::Mapping;

use crate::config::GeneratorConfig;
use crate::error::{AgentgenError, Result};
use crate::progress::ProgressDisplay;
use crate::template::frontmatter::Frontmatter;
use crate::template::{discovery, frontmatter, renderer, resolver, writer};

/// What happened to a single template.
#[derive(Debug)]
pub enum TemplateOutcome {
    /// Generated document written to `path`.
    Created { path: PathBuf },
    /// Header carries no usable `output` block.
    MissingOutput,
    /// `output` block carries no string `file_name`.
    MissingFileName,
}

/// Counts for one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub discovered: usize,
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

fn warn_tag() -> console::StyledObject<&'static str> {
    Style::new().yellow().bold().apply_to("Warning:")
}

/// Process a single template file into its generated document.
pub fn process_template(template: &Path, output_dir: &Path) -> Result<TemplateOutcome> {
    let content =
        std::fs::read_to_string(template).map_err(|e| AgentgenError::FileReadFailed {
            path: template.display().to_string(),
            reason: e.to_string(),
        })?;

    let (parsed, body) = frontmatter::split_frontmatter(&content);
    let header = match parsed {
        Frontmatter::Present(mapping) => mapping,
        Frontmatter::Absent => Mapping::new(),
        Frontmatter::Malformed { reason } => {
            println!(
                "{} header parse error in {}: {}",
                warn_tag(),
                template.display(),
                reason
            );
            Mapping::new()
        }
    };

    let Some(output) = resolver::output_spec(&header) else {
        return Ok(TemplateOutcome::MissingOutput);
    };
    let Some(file_name) = output.file_name() else {
        return Ok(TemplateOutcome::MissingFileName);
    };

    let variables = resolver::resolve_variables(&header, &output);
    let rendered = renderer::substitute(&body, &variables);

    let target = output_dir.join(file_name);
    let document = writer::compose_document(&header, &rendered, template)?;
    writer::write_document(&document, &target)?;

    Ok(TemplateOutcome::Created { path: target })
}

/// Run the whole batch described by `config`.
pub fn run_batch(config: &GeneratorConfig) -> Result<BatchSummary> {
    let templates = discovery::discover_templates(&config.template_dir, &config.pattern)?;

    let mut summary = BatchSummary {
        discovered: templates.len(),
        ..BatchSummary::default()
    };

    if templates.is_empty() {
        println!(
            "No template files found in {}",
            config.template_dir.display()
        );
        return Ok(summary);
    }

    println!("Found {} template file(s)", templates.len());

    let progress = ProgressDisplay::new(templates.len() as u64);
    for template in &templates {
        println!("Processing: {}", template.display());
        progress.update_template(&template.display().to_string());

        match process_template(template, &config.output_dir) {
            Ok(TemplateOutcome::Created { path }) => {
                println!(
                    "{} {}",
                    Style::new().green().apply_to("Created:"),
                    path.display()
                );
                summary.created += 1;
            }
            Ok(TemplateOutcome::MissingOutput) => {
                println!(
                    "{} no output info found in {}",
                    warn_tag(),
                    template.display()
                );
                summary.skipped += 1;
            }
            Ok(TemplateOutcome::MissingFileName) => {
                println!(
                    "{} no file_name in output info for {}",
                    warn_tag(),
                    template.display()
                );
                summary.skipped += 1;
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", template.display(), e);
                summary.failed += 1;
            }
        }
        progress.inc();
    }
    progress.finish();

    Ok(summary)
}
