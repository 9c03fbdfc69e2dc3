//! Classification of the free-form answer to the batch request.

use serde_json::{Map, Value};

use crate::domain::field_mapping::FieldMapping;
use crate::domain::placeholders::PlaceholderSet;

/// What the batch answer gave us, relative to the requested placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchResponse {
    /// Every placeholder has a value.
    Complete(FieldMapping),
    /// Some placeholders have values; `missing` need individual requests.
    Partial { found: FieldMapping, missing: Vec<String> },
    /// No JSON object covering any placeholder could be recovered.
    Unstructured,
}

impl BatchResponse {
    /// Parse `text` against `placeholders`.
    ///
    /// A parsed object that covers none of the placeholders is `Unstructured`.
    pub fn classify(text: &str, placeholders: &PlaceholderSet) -> Self {
        let Some(object) = extract_structured_region(text) else {
            return BatchResponse::Unstructured;
        };

        let found: FieldMapping = placeholders
            .iter()
            .filter_map(|name| object.get(name).and_then(field_value).map(|value| (name, value)))
            .collect();

        if found.is_empty() {
            return BatchResponse::Unstructured;
        }

        let missing = found.missing_from(placeholders);
        if missing.is_empty() {
            BatchResponse::Complete(found)
        } else {
            BatchResponse::Partial { found, missing }
        }
    }
}

/// Find the first balanced top-level `{...}` region and parse it as a JSON
/// object. String literals are honored when balancing braces.
pub fn extract_structured_region(text: &str) -> Option<Map<String, Value>> {
    let start = text.find('{')?;
    let end = balanced_object_end(text, start)?;
    parse_object(&text[start..=end])
}

fn parse_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Byte index of the `}` closing the object opened at `start`.
fn balanced_object_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}

/// Convert one JSON value into field text. `None` means "treat as missing".
fn field_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) => {
            let lines: Vec<String> = items.iter().filter_map(scalar_text).collect();
            if lines.is_empty() || lines.len() != items.len() {
                None
            } else {
                Some(lines.join("\n"))
            }
        }
        Value::Null | Value::Object(_) => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
