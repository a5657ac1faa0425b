//! Error resource
//!
//! Bodies carrying an `errors` key decode into this instead of the requested
//! resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Errors reported by the document store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrors {
    #[serde(default)]
    pub errors: Value,
}

impl ApiErrors {
    /// Human-readable messages, whatever shape the server used
    pub fn messages(&self) -> Vec<String> {
        match &self.errors {
            Value::Null => vec![],
            Value::Array(items) => items.iter().map(message_of).collect(),
            Value::Object(fields) => fields
                .iter()
                .map(|(field, value)| format!("{}: {}", field, message_of(value)))
                .collect(),
            other => vec![message_of(other)],
        }
    }
}

fn message_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(fields) => ["detail", "message"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Value::Array(items) => items
            .iter()
            .map(message_of)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages_from_list() {
        let errors: ApiErrors = serde_json::from_value(json!({
            "errors": ["Not found", {"detail": "Schema missing"}]
        }))
        .unwrap();
        assert_eq!(errors.messages(), vec!["Not found", "Schema missing"]);
    }

    #[test]
    fn test_messages_from_field_map() {
        let errors: ApiErrors = serde_json::from_value(json!({
            "errors": {"name": ["is required", "is too short"]}
        }))
        .unwrap();
        assert_eq!(errors.messages(), vec!["name: is required, is too short"]);
    }

    #[test]
    fn test_no_messages() {
        assert!(ApiErrors::default().messages().is_empty());
    }
}
