//! Split template files into a YAML frontmatter header and a body.
//!
//! The header is the block between a leading `---` line and the next `---`
//! line. A document without a header is a valid (if unusable) state; a
//! header that does not parse as a YAML mapping is reported back to the
//! caller instead of guessing a partial parse.

use serde_yaml::{Mapping, Value};

/// Outcome of looking for a frontmatter block at the start of a document.
#[derive(Debug)]
pub enum Frontmatter {
    /// A delimited block that parsed as a YAML mapping (possibly empty).
    Present(Mapping),
    /// No delimited block at the start of the document.
    Absent,
    /// A delimited block that is not valid YAML, or not a mapping.
    Malformed { reason: String },
}

/// Split content into frontmatter and body.
///
/// When the frontmatter is absent or malformed the body is the entire
/// original content, byte for byte. Delimiter lines match after trimming
/// whitespace, so `\r\n` line endings are tolerated.
pub fn split_frontmatter(content: &str) -> (Frontmatter, String) {
    let Some(first_line) = content.split_inclusive('\n').next() else {
        return (Frontmatter::Absent, String::new());
    };
    if first_line.trim() != "---" || !first_line.ends_with('\n') {
        return (Frontmatter::Absent, content.to_string());
    }

    let header_start = first_line.len();
    let mut pos = header_start;
    for line in content[header_start..].split_inclusive('\n') {
        let line_start = pos;
        pos += line.len();
        if line.trim() == "---" {
            let header = &content[header_start..line_start];
            let body = content[pos..].to_string();
            return (parse_header(header), body);
        }
    }

    // No closing delimiter: the whole document is body.
    (Frontmatter::Absent, content.to_string())
}

fn parse_header(header: &str) -> Frontmatter {
    match serde_yaml::from_str::<Value>(header) {
        Ok(Value::Mapping(mapping)) => Frontmatter::Present(mapping),
        Ok(Value::Null) => Frontmatter::Present(Mapping::new()),
        Ok(_) => Frontmatter::Malformed {
            reason: "header is not a key/value mapping".to_string(),
        },
        Err(e) => Frontmatter::Malformed {
            reason: e.to_string(),
        },
    }
}

/// Serialize a header mapping back to YAML text, preserving key order.
pub fn serialize_frontmatter(header: &Mapping) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(header)
}
