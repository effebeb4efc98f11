//! Run configuration for the template pipeline
//!
//! Paths are resolved once at startup and passed explicitly into the
//! pipeline, so the batch can be exercised against arbitrary directories.

use std::path::{Path, PathBuf};

use crate::cli::GenerateArgs;
use crate::error::Result;

/// Directories and file filter the generator operates on
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory scanned for template files
    pub template_dir: PathBuf,
    /// Base directory generated files are written under
    pub output_dir: PathBuf,
    /// Glob pattern a file name must match to count as a template
    pub pattern: String,
}

impl GeneratorConfig {
    /// Resolve configuration from CLI arguments against the workspace root.
    ///
    /// Relative paths resolve against the workspace (or the current
    /// directory when no workspace is given). Generated files default to
    /// landing next to their templates.
    pub fn from_args(workspace: Option<PathBuf>, args: &GenerateArgs) -> Result<Self> {
        let root = match workspace {
            Some(path) => path,
            None => std::env::current_dir()?,
        };

        let template_dir = resolve(
            &root,
            args.templates.as_deref().unwrap_or(Path::new("templates")),
        );
        let output_dir = match args.output.as_deref() {
            Some(path) => resolve(&root, path),
            None => template_dir.clone(),
        };

        Ok(Self {
            template_dir,
            output_dir,
            pattern: args.pattern.clone(),
        })
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
