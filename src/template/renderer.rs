//! Placeholder substitution for template bodies.
//!
//! Replaces `{{key}}` occurrences in a single left-to-right pass. Unknown
//! keys stay in the output verbatim, and replacement text is never
//! re-scanned for further placeholders.

use serde_yaml::{Mapping, Value};

/// Substitute `{{key}}` placeholders in `body` from `variables`.
pub fn substitute(body: &str, variables: &Mapping) -> String {
    let mut rendered = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(open) = rest.find("{{") {
        rendered.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find("}}") else {
            // Unterminated placeholder: keep the tail as-is.
            rendered.push_str(&rest[open..]);
            return rendered;
        };

        let key = &after_open[..close];
        match variables.get(Value::String(key.to_string())) {
            Some(value) => {
                rendered.push_str(&value_to_string(value));
                rest = &after_open[close + 2..];
            }
            None => {
                // Unknown key: emit the opening braces and keep scanning
                // right after them, so overlapping placeholders still match.
                rendered.push_str("{{");
                rest = after_open;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

/// Render a header value as substitution text.
///
/// Scalars use their display form, null the empty string, and nested
/// mappings or sequences their YAML form.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn variables_from(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).expect("test variables should parse")
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let variables = variables_from("name: Alice\n");
        let rendered = substitute("Hi {{name}}, bye {{name}}!", &variables);
        assert_eq!(rendered, "Hi Alice, bye Alice!");
    }

    #[test]
    fn test_unknown_key_left_verbatim() {
        let variables = variables_from("name: Alice\n");
        let rendered = substitute("Hi {{name}}, {{missing}} stays", &variables);
        assert_eq!(rendered, "Hi Alice, {{missing}} stays");
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        let body = "No placeholders here, {{or_unresolved_ones}}.\n";
        assert_eq!(substitute(body, &Mapping::new()), body);
    }

    #[test]
    fn test_number_and_bool_values() {
        let variables = variables_from("retries: 3\nstrict: true\n");
        let rendered = substitute("retries={{retries}} strict={{strict}}", &variables);
        assert_eq!(rendered, "retries=3 strict=true");
    }

    #[test]
    fn test_null_value_renders_empty() {
        let variables = variables_from("gone: null\n");
        assert_eq!(substitute("[{{gone}}]", &variables), "[]");
    }

    #[test]
    fn test_sequence_value_renders_as_yaml() {
        let variables = variables_from("tools: [search, edit]\n");
        let rendered = substitute("{{tools}}", &variables);
        assert_eq!(rendered, "- search\n- edit");
    }

    #[test]
    fn test_replacement_text_is_not_rescanned() {
        let variables = variables_from("a: \"{{b}}\"\nb: X\n");
        // a's value contains a placeholder; single-pass rendering leaves it
        let rendered = substitute("{{a}} {{b}}", &variables);
        assert_eq!(rendered, "{{b}} X");
    }

    #[test]
    fn test_unterminated_placeholder_kept() {
        let variables = variables_from("name: Alice\n");
        assert_eq!(substitute("oops {{name", &variables), "oops {{name");
    }

    #[test]
    fn test_overlapping_braces_still_resolve() {
        let variables = variables_from("name: Alice\n");
        assert_eq!(substitute("{{ {{name}} }}", &variables), "{{ Alice }}");
    }

    #[test]
    fn test_deterministic_for_fixed_mapping() {
        let variables = variables_from("a: one\nb: two\n");
        let body = "{{a}}-{{b}}-{{a}}";
        assert_eq!(substitute(body, &variables), substitute(body, &variables));
    }
}
