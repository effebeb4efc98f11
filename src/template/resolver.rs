//! Variable resolution for one template.
//!
//! Substitution variables come from the header's `metadata` block,
//! overridden by every `output` key except the reserved `file_name`.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// The `output:` block of a template header.
///
/// `file_name` routes the generated document and never becomes a
/// substitution variable; every other key participates in resolution.
#[derive(Debug, Default, Deserialize)]
pub struct OutputSpec {
    #[serde(default)]
    file_name: Option<Value>,
    /// Remaining output keys; these override `metadata` values.
    #[serde(flatten)]
    pub variables: Mapping,
}

impl OutputSpec {
    /// Destination file name, when declared as a string.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_ref().and_then(Value::as_str)
    }
}

/// Extract the `output` block from a header.
///
/// Returns `None` when the header has no `output` key or its value is not a
/// mapping.
pub fn output_spec(header: &Mapping) -> Option<OutputSpec> {
    let value = header.get(Value::String("output".to_string()))?;
    serde_yaml::from_value(value.clone()).ok()
}

/// Merge `metadata` and `output` values into one substitution mapping.
///
/// `output` values win over `metadata` values for the same key. The header
/// itself is left untouched; values are cloned into the fresh mapping, which
/// keeps a deterministic insertion order for rendering.
pub fn resolve_variables(header: &Mapping, output: &OutputSpec) -> Mapping {
    let mut variables = Mapping::new();

    if let Some(Value::Mapping(metadata)) = header.get(Value::String("metadata".to_string())) {
        for (key, value) in metadata {
            variables.insert(key.clone(), value.clone());
        }
    }

    for (key, value) in &output.variables {
        variables.insert(key.clone(), value.clone());
    }

    variables
}
