//! Template discovery in the template directory.
//!
//! Lists files directly inside the directory (non-recursive), keeps names
//! matching the configured glob, and sorts the result so batches run in a
//! stable order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{AgentgenError, Result};

/// List template files under `dir` whose file name matches `pattern`.
pub fn discover_templates(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let glob = Glob::new(pattern).map_err(|e| AgentgenError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    if !dir.is_dir() {
        return Err(AgentgenError::TemplateDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| AgentgenError::TemplateDirListFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if glob.matched(&CandidatePath::from(name.as_ref())).is_some() {
            templates.push(entry.into_path());
        }
    }

    templates.sort();
    Ok(templates)
}
