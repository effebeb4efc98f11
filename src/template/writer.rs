//! Compose and persist generated documents.
//!
//! The header is re-serialized in declaration order and framed between
//! `---` delimiter lines, followed by the rendered body. Destinations are
//! overwritten unconditionally.

use std::path::Path;

use serde_yaml::Mapping;

use crate::error::{AgentgenError, Result};
use crate::template::frontmatter;

fn file_write_error(path: &Path, e: std::io::Error) -> AgentgenError {
    AgentgenError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| file_write_error(parent, e))?;
    }
    Ok(())
}

/// Reassemble a full document from its header and rendered body.
///
/// `origin` names the template in serialization errors.
pub fn compose_document(header: &Mapping, body: &str, origin: &Path) -> Result<String> {
    let yaml = frontmatter::serialize_frontmatter(header).map_err(|e| {
        AgentgenError::HeaderSerializeFailed {
            path: origin.display().to_string(),
            reason: e.to_string(),
        }
    })?;
    Ok(format!("---\n{yaml}---\n{body}"))
}

/// Write a composed document to its destination, creating parent directories.
pub fn write_document(content: &str, target: &Path) -> Result<()> {
    ensure_parent_dir(target)?;
    std::fs::write(target, content).map_err(|e| file_write_error(target, e))?;
    Ok(())
}
